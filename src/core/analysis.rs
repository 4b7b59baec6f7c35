use serde::{Deserialize, Serialize};

/// Sign and range summary of a dataset, recomputed on every dataset change.
///
/// `axis_min`/`axis_max` are the value-axis bounds: symmetric around zero when
/// the data mixes strict positives and strict negatives, raw min/max otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAnalysis {
    pub min: f64,
    pub max: f64,
    pub axis_min: f64,
    pub axis_max: f64,
    pub has_positive: bool,
    pub has_negative: bool,
    pub all_positive: bool,
    pub all_negative: bool,
}

impl Default for AxisAnalysis {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            axis_min: 0.0,
            axis_max: 0.0,
            has_positive: false,
            has_negative: false,
            all_positive: false,
            all_negative: false,
        }
    }
}

/// Analyzes the dataset in a single pass.
///
/// Values exactly zero count toward neither `has_positive` nor `has_negative`,
/// but toward both `all_positive` and `all_negative`, so an all-zero dataset
/// reports both `all_*` flags true. Inputs are expected to be finite; the
/// engine rejects non-finite values at its boundary.
#[must_use]
pub fn analyze(values: &[f64]) -> AxisAnalysis {
    if values.is_empty() {
        return AxisAnalysis::default();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut has_positive = false;
    let mut has_negative = false;
    let mut all_positive = true;
    let mut all_negative = true;

    for &value in values {
        min = min.min(value);
        max = max.max(value);
        has_positive |= value > 0.0;
        has_negative |= value < 0.0;
        all_positive &= value >= 0.0;
        all_negative &= value <= 0.0;
    }

    // Mixed strict signs force symmetric bounds so zero sits at the center.
    let (axis_min, axis_max) = if has_positive && has_negative {
        let magnitude = min.abs().max(max.abs());
        (-magnitude, magnitude)
    } else {
        (min, max)
    };

    AxisAnalysis {
        min,
        max,
        axis_min,
        axis_max,
        has_positive,
        has_negative,
        all_positive,
        all_negative,
    }
}
