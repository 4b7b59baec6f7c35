use crate::core::analysis::AxisAnalysis;

/// Maps `value` into a signed percentage of the `[min, max]` axis range.
///
/// For an axis entirely at or above zero this is plain linear interpolation;
/// for an axis entirely at or below zero the same law mirrored. When the axis
/// straddles zero each side scales against its own half-range, so the result's
/// magnitude is the bar length from the zero baseline and its sign the bar
/// direction. A `[0, 0]` axis maps everything to 0.
#[must_use]
pub fn size_in_percentages(value: f64, min: f64, max: f64) -> f64 {
    if min == 0.0 && max == 0.0 {
        return 0.0;
    }

    if min >= 0.0 && max >= 0.0 {
        return (value - min) / (max - min) * 100.0;
    }

    if min <= 0.0 && max <= 0.0 {
        return (max - value) / (max - min) * 100.0;
    }

    if value >= 0.0 {
        value / max * 100.0
    } else {
        value.abs() / min.abs() * 100.0
    }
}

/// Classifies a bar as positive or negative for styling.
///
/// Unless the dataset is strictly all-negative, zero counts as positive; in an
/// all-negative dataset a bar must be strictly greater than zero to classify
/// as positive. The asymmetry is intentional and externally visible.
#[must_use]
pub fn is_positive_bar(value: f64, analysis: &AxisAnalysis) -> bool {
    if analysis.all_positive || !analysis.all_negative {
        value >= 0.0
    } else {
        value > 0.0
    }
}
