use std::sync::Arc;

use crate::core::CategoryLabel;

/// Strategy function formatting a category label for display.
pub type CategoryFormatter = Arc<dyn Fn(&CategoryLabel) -> String + Send + Sync>;

/// Strategy function formatting a numeric value for display.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Optional formatters injected by the host, each defaulting to identity.
///
/// Formatters apply only at label-formatting boundaries; the numeric
/// algorithms never see formatted output.
#[derive(Clone, Default)]
pub struct ValueFormatters {
    /// Category-axis labels.
    pub category: Option<CategoryFormatter>,
    /// Value-axis tick labels.
    pub value: Option<ValueFormatter>,
    /// In-bar data labels.
    pub data: Option<ValueFormatter>,
    /// Tooltip values.
    pub tooltip: Option<ValueFormatter>,
}

/// Applies the category formatter, falling back to the label's display form.
#[must_use]
pub fn format_category_label(label: &CategoryLabel, formatter: Option<&CategoryFormatter>) -> String {
    match formatter {
        Some(format) => format(label),
        None => label.to_string(),
    }
}

/// Applies a value formatter, falling back to the shortest decimal rendering.
#[must_use]
pub fn format_value_label(value: f64, formatter: Option<&ValueFormatter>) -> String {
    match formatter {
        Some(format) => format(value),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::{ValueFormatter, format_category_label, format_value_label};
    use crate::core::CategoryLabel;

    #[test]
    fn missing_formatters_fall_back_to_identity() {
        let label = CategoryLabel::from("Q1");
        assert_eq!(format_category_label(&label, None), "Q1");
        assert_eq!(format_value_label(3500.0, None), "3500");
    }

    #[test]
    fn injected_formatter_wins() {
        let formatter: ValueFormatter = Arc::new(|value| format!("{value} EUR"));
        assert_eq!(format_value_label(42.0, Some(&formatter)), "42 EUR");
    }
}
