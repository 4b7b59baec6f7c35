use tracing::{debug, trace};

use crate::core::{TextMeasurer, calculate_gutter_widths, longest_label};
use crate::interaction::{GutterDragGesture, GutterResizeKey, keyboard_resize};

use super::BarChartEngine;
use super::labels::{format_category_label, format_value_label};

impl BarChartEngine {
    /// Formatted labels occupying the gutter axis: value ticks in vertical
    /// orientation, categories in horizontal.
    #[must_use]
    pub fn gutter_axis_labels(&self) -> Vec<String> {
        if self.orientation.is_vertical() {
            self.ticks
                .iter()
                .map(|&tick| format_value_label(tick, self.formatters.value.as_ref()))
                .collect()
        } else {
            self.data
                .iter()
                .map(|item| {
                    format_category_label(&item.category, self.formatters.category.as_ref())
                })
                .collect()
        }
    }

    /// Recomputes gutter bounds from host-measured label pixel widths.
    pub fn apply_label_measurements(&mut self, label_widths: &[f64], container_width: f64) {
        self.container_width = container_width.is_finite().then_some(container_width);
        self.gutter = calculate_gutter_widths(label_widths, container_width);
        debug!(
            min = self.gutter.min,
            width = self.gutter.width,
            max = self.gutter.max,
            "apply label measurements"
        );
    }

    /// Refreshes gutter bounds by measuring the widest candidate label
    /// through the host's measurement provider. A single measurement
    /// suffices: the candidate is chosen by the longest-label heuristic.
    pub fn refresh_gutter_widths(&mut self, measurer: &dyn TextMeasurer, container_width: f64) {
        let labels = self.gutter_axis_labels();
        match longest_label(&labels) {
            Some(label) => {
                let width = measurer.text_width(label);
                self.apply_label_measurements(&[width], container_width);
            }
            None => self.apply_label_measurements(&[], container_width),
        }
    }

    /// Starts a gutter drag gesture at the given pointer X.
    pub fn begin_gutter_drag(&mut self, pointer_x: f64) {
        let container = self.container_width.unwrap_or(f64::INFINITY);
        self.drag = Some(GutterDragGesture::begin(
            pointer_x,
            self.gutter,
            self.axis_side,
            container,
        ));
        self.interaction.on_gutter_resize_start();
        trace!(pointer_x, "begin gutter drag");
    }

    /// Feeds a pointer-move into the active gesture and returns the live
    /// width the host should apply, or `None` when no drag is active.
    pub fn update_gutter_drag(&mut self, pointer_x: f64) -> Option<f64> {
        self.drag.as_mut().map(|gesture| gesture.update(pointer_x))
    }

    /// Ends the gesture, committing the last live width to persistent state.
    /// Returns the committed width, or `None` when no drag was active.
    pub fn end_gutter_drag(&mut self) -> Option<f64> {
        let gesture = self.drag.take()?;
        let width = gesture.commit();
        self.gutter.width = width;
        self.interaction.on_gutter_resize_end();
        debug!(width, "commit gutter drag");
        Some(width)
    }

    /// Terminates the gesture on pointer-cancel or capture loss. The last
    /// live width is committed, matching the pointer-up path.
    pub fn cancel_gutter_drag(&mut self) -> Option<f64> {
        self.end_gutter_drag()
    }

    /// Applies a keyboard resize step. Returns the new width, or `None` when
    /// the key leaves the width unchanged (already at a boundary).
    pub fn keyboard_resize_gutter(&mut self, key: GutterResizeKey) -> Option<f64> {
        let width = keyboard_resize(self.gutter, key, self.axis_side)?;
        self.gutter.width = width;
        trace!(?key, width, "keyboard gutter resize");
        Some(width)
    }
}
