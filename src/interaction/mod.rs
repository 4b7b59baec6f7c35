use serde::{Deserialize, Serialize};

use crate::core::gutter::{GutterWidthUpdate, GutterWidths, MAX_GUTTER_WIDTH, updated_gutter_width};
use crate::core::types::{AxisSide, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    ResizingGutter,
}

/// Explicit state for an in-flight gutter drag gesture.
///
/// The gesture captures everything it needs at pointer-down (origin, starting
/// width, bounds, anchor side, container width); each pointer-move computes a
/// live width as a pure function of the captured state and the pointer
/// position. The live width is committed on release, and likewise on any
/// other termination (pointer-cancel, capture loss).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GutterDragGesture {
    origin_x: f64,
    start_width: f64,
    bounds: GutterWidths,
    anchor: AxisSide,
    container_width: f64,
    live_width: f64,
}

impl GutterDragGesture {
    #[must_use]
    pub fn begin(
        origin_x: f64,
        widths: GutterWidths,
        anchor: AxisSide,
        container_width: f64,
    ) -> Self {
        Self {
            origin_x,
            start_width: widths.width,
            bounds: widths,
            anchor,
            container_width,
            live_width: widths.width,
        }
    }

    /// Recomputes the live width for the current pointer position, clamped to
    /// the allowed range. The delta sign flips with the anchor side.
    pub fn update(&mut self, pointer_x: f64) -> f64 {
        let delta = match self.anchor {
            AxisSide::Left => pointer_x - self.origin_x,
            AxisSide::Right => self.origin_x - pointer_x,
        };
        let mut new_width = self.start_width + delta;

        // The pointer is outside the slider; lock the thumb within bounds.
        if new_width < self.bounds.min {
            new_width = self.bounds.min;
        }

        let mut allowed_max = self.bounds.max;
        if self.container_width.is_finite()
            && self.bounds.max > self.container_width - MAX_GUTTER_WIDTH
        {
            allowed_max = self.container_width - MAX_GUTTER_WIDTH;
        }
        if new_width > allowed_max {
            new_width = allowed_max;
        }

        self.live_width = new_width;
        new_width
    }

    #[must_use]
    pub fn live_width(&self) -> f64 {
        self.live_width
    }

    /// Consumes the gesture and yields the width to persist.
    #[must_use]
    pub fn commit(self) -> f64 {
        self.live_width
    }
}

/// Keys that resize the gutter. Arrow direction maps to grow/shrink based on
/// the anchor side; Home and End jump to the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GutterResizeKey {
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

/// Percentage step applied by a single arrow-key press.
pub const KEYBOARD_STEP_PERCENT: f64 = 5.0;

/// Computes the new gutter width for a key press, or `None` when the key
/// leaves the width unchanged (already at a boundary).
#[must_use]
pub fn keyboard_resize(widths: GutterWidths, key: GutterResizeKey, side: AxisSide) -> Option<f64> {
    let current = widths.width_percentage();
    let shrink_key = match side {
        AxisSide::Left => GutterResizeKey::ArrowLeft,
        AxisSide::Right => GutterResizeKey::ArrowRight,
    };

    let target = match key {
        GutterResizeKey::Home => 0.0,
        GutterResizeKey::End => 100.0,
        arrow if arrow == shrink_key => (current - KEYBOARD_STEP_PERCENT).max(0.0),
        _ => (current + KEYBOARD_STEP_PERCENT).min(100.0),
    };

    updated_gutter_width(GutterWidthUpdate {
        current_percentage: current,
        min_width: widths.min,
        max_width: widths.max,
        width_percentage: target,
    })
}

/// Tooltip placement relative to its bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TooltipPlacement {
    Left,
    Right,
    Top,
    Bottom,
}

/// Which container edges the tooltip's bounding box crosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeCollisions {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

/// Flips the tooltip to the opposite side when it collides with the edge it
/// faces: left/right in vertical orientation, top/bottom in horizontal.
/// Placements along the other axis pass through untouched.
#[must_use]
pub fn resolve_tooltip_placement(
    orientation: Orientation,
    current: TooltipPlacement,
    collisions: EdgeCollisions,
) -> TooltipPlacement {
    match orientation {
        Orientation::Vertical => match current {
            TooltipPlacement::Right if collisions.right => TooltipPlacement::Left,
            TooltipPlacement::Left if collisions.left => TooltipPlacement::Right,
            other => other,
        },
        Orientation::Horizontal => match current {
            TooltipPlacement::Bottom if collisions.bottom => TooltipPlacement::Top,
            TooltipPlacement::Top if collisions.top => TooltipPlacement::Bottom,
            other => other,
        },
    }
}

/// Per-chart interaction state: current mode plus hover/focus tracking for
/// the active bar. Hover is suppressed while a gutter drag is in flight so
/// the tooltip does not chase the pointer mid-resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    active_bar: Option<usize>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            active_bar: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn is_resizing_gutter(self) -> bool {
        self.mode == InteractionMode::ResizingGutter
    }

    #[must_use]
    pub fn active_bar(self) -> Option<usize> {
        self.active_bar
    }

    pub fn on_bar_enter(&mut self, index: usize) {
        if self.is_resizing_gutter() {
            return;
        }
        self.active_bar = Some(index);
    }

    pub fn on_bar_leave(&mut self) {
        self.active_bar = None;
    }

    pub fn on_gutter_resize_start(&mut self) {
        self.mode = InteractionMode::ResizingGutter;
    }

    pub fn on_gutter_resize_end(&mut self) {
        self.mode = InteractionMode::Idle;
    }
}
