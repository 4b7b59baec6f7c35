use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Width of the grab line inside the gutter, included in every width bound.
pub const AXIS_LINE_WIDTH: f64 = 16.0;
pub const DEFAULT_GUTTER_WIDTH: f64 = 96.0 + AXIS_LINE_WIDTH;
pub const MIN_GUTTER_WIDTH: f64 = 50.0 + AXIS_LINE_WIDTH;
pub const MAX_GUTTER_WIDTH: f64 = 268.0 + AXIS_LINE_WIDTH;
/// Minimum plotting area reserved next to the gutter.
pub const MAX_CONTENT_WIDTH: f64 = 130.0;
/// Label margin: 4px spacing plus 2px to avoid ellipsis.
const LABEL_MARGIN: f64 = 6.0;

/// Axis-gutter width bounds and current width, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GutterWidths {
    pub min: f64,
    pub width: f64,
    pub max: f64,
}

impl Default for GutterWidths {
    fn default() -> Self {
        Self {
            min: MIN_GUTTER_WIDTH,
            width: DEFAULT_GUTTER_WIDTH,
            max: MAX_GUTTER_WIDTH,
        }
    }
}

impl GutterWidths {
    /// Current width as a position between `min` and `max`, rounded to a whole
    /// percentage in `[0, 100]`. Also drives the accessibility value text.
    #[must_use]
    pub fn width_percentage(&self) -> f64 {
        let span = self.max - self.min;
        ((self.width - self.min) * 100.0 / span).round()
    }

    /// Accessibility live-region text for the gutter offset.
    #[must_use]
    pub fn offset_description(&self) -> String {
        format!("Y-axis offset {}%", self.width_percentage())
    }
}

/// Computes gutter width bounds from measured label pixel widths.
///
/// The longest measured label plus the grab-line width and label margin forms
/// a candidate width. The allowed range expands to accommodate genuinely long
/// labels: `min` shrinks below its constant when the candidate is short, `max`
/// grows past its constant when the candidate is long. The starting width is
/// soft-capped at the comfortable default and never eats into the reserved
/// plotting area; growing beyond that takes explicit user interaction.
///
/// Empty `label_widths` falls back to the constant defaults, as does a missing
/// measurement context on the host side.
#[must_use]
pub fn calculate_gutter_widths(label_widths: &[f64], container_width: f64) -> GutterWidths {
    let Some(longest) = label_widths
        .iter()
        .copied()
        .max_by_key(|&width| OrderedFloat(width))
    else {
        return GutterWidths::default();
    };

    let candidate = longest + AXIS_LINE_WIDTH + LABEL_MARGIN;
    let min = candidate.min(MIN_GUTTER_WIDTH);
    let max = candidate.max(MAX_GUTTER_WIDTH);

    let mut width = candidate;
    if width > DEFAULT_GUTTER_WIDTH {
        width = DEFAULT_GUTTER_WIDTH;
    }
    if container_width.is_finite() && width > container_width - MAX_CONTENT_WIDTH {
        width = container_width - MAX_CONTENT_WIDTH;
    }

    GutterWidths { min, width, max }
}

/// Parameters for a percentage-driven gutter width update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GutterWidthUpdate {
    /// Previously applied gutter width, in percent.
    pub current_percentage: f64,
    /// Minimum allowed width, in pixels.
    pub min_width: f64,
    /// Maximum allowed width, in pixels.
    pub max_width: f64,
    /// Newly requested width, in percent.
    pub width_percentage: f64,
}

/// Maps a target percentage in `[0, 100]` affinely onto `[min_width,
/// max_width]` and returns the new pixel width.
///
/// Returns `None` when the target equals the current percentage, so callers
/// at a boundary skip redundant state writes.
#[must_use]
pub fn updated_gutter_width(update: GutterWidthUpdate) -> Option<f64> {
    if update.current_percentage == update.width_percentage {
        return None;
    }

    let span = update.max_width - update.min_width;
    Some(span * update.width_percentage / 100.0 + update.min_width)
}

#[cfg(test)]
mod tests {
    use super::{
        DEFAULT_GUTTER_WIDTH, GutterWidthUpdate, GutterWidths, MAX_GUTTER_WIDTH, MIN_GUTTER_WIDTH,
        calculate_gutter_widths, updated_gutter_width,
    };

    #[test]
    fn no_measurements_fall_back_to_defaults() {
        let widths = calculate_gutter_widths(&[], 800.0);
        assert_eq!(widths, GutterWidths::default());
    }

    #[test]
    fn long_labels_expand_the_allowed_maximum() {
        let widths = calculate_gutter_widths(&[400.0], 1200.0);
        assert_eq!(widths.max, 400.0 + 16.0 + 6.0);
        assert_eq!(widths.min, MIN_GUTTER_WIDTH);
        assert_eq!(widths.width, DEFAULT_GUTTER_WIDTH);
        assert!(widths.max > MAX_GUTTER_WIDTH);
    }

    #[test]
    fn equal_percentages_are_a_no_op() {
        let update = GutterWidthUpdate {
            current_percentage: 50.0,
            min_width: 0.0,
            max_width: 100.0,
            width_percentage: 50.0,
        };
        assert_eq!(updated_gutter_width(update), None);
    }
}
