use crate::core::{is_positive_bar, size_in_percentages};

use super::BarChartEngine;
use super::labels::{format_category_label, format_value_label};

/// Render-ready numbers for one bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarMetrics {
    /// Formatted category label.
    pub category: String,
    /// Raw value.
    pub value: f64,
    /// Percentage of the axis range for this value.
    pub size_percentage: f64,
    /// Bar extent from the baseline, `size_percentage.abs()`.
    pub extent: f64,
    /// Styling class: positive or negative.
    pub positive: bool,
    /// Formatted in-bar data label.
    pub label: String,
}

impl BarChartEngine {
    /// Computes per-bar metrics in dataset order.
    #[must_use]
    pub fn bar_metrics(&self) -> Vec<BarMetrics> {
        self.data
            .iter()
            .map(|item| {
                let size_percentage = size_in_percentages(
                    item.value,
                    self.analysis.axis_min,
                    self.analysis.axis_max,
                );
                BarMetrics {
                    category: format_category_label(
                        &item.category,
                        self.formatters.category.as_ref(),
                    ),
                    value: item.value,
                    size_percentage,
                    extent: size_percentage.abs(),
                    positive: is_positive_bar(item.value, &self.analysis),
                    label: format_value_label(item.value, self.formatters.data.as_ref()),
                }
            })
            .collect()
    }

    /// Tooltip text for the bar at `index`, `"{category}: {value}"` with the
    /// tooltip formatter applied to the value. `None` for an out-of-range
    /// index.
    #[must_use]
    pub fn tooltip_text(&self, index: usize) -> Option<String> {
        let item = self.data.get(index)?;
        let category = format_category_label(&item.category, self.formatters.category.as_ref());
        let value = format_value_label(item.value, self.formatters.tooltip.as_ref());
        Some(format!("{category}: {value}"))
    }
}
