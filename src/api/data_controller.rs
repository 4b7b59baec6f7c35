use tracing::{debug, trace};

use crate::core::{DataItem, Orientation, analyze, generate_ticks};
use crate::error::{BarChartError, BarChartResult};

use super::{BarChartEngine, ValueFormatters};

impl BarChartEngine {
    /// Replaces the dataset and recomputes all derived state: sign/range
    /// analysis first, then axis ticks from the analyzed bounds.
    ///
    /// Non-finite values are rejected at this boundary so the numeric core
    /// stays total over its domain. Gutter bounds are refreshed when the host
    /// next supplies label measurements.
    pub fn set_data(&mut self, data: Vec<DataItem>) -> BarChartResult<()> {
        if let Some(item) = data.iter().find(|item| !item.value.is_finite()) {
            return Err(BarChartError::InvalidData(format!(
                "value for category '{}' must be finite",
                item.category
            )));
        }

        self.values = data.iter().map(|item| item.value).collect();
        self.data = data;
        self.recompute_axis();
        self.interaction.on_bar_leave();
        debug!(
            count = self.data.len(),
            axis_min = self.analysis.axis_min,
            axis_max = self.analysis.axis_max,
            "set data"
        );
        Ok(())
    }

    /// Appends a single item, recomputing derived state.
    pub fn append_item(&mut self, item: DataItem) -> BarChartResult<()> {
        if !item.value.is_finite() {
            return Err(BarChartError::InvalidData(format!(
                "value for category '{}' must be finite",
                item.category
            )));
        }

        self.values.push(item.value);
        self.data.push(item);
        self.recompute_axis();
        trace!(count = self.data.len(), "append data item");
        Ok(())
    }

    /// Changes orientation, swapping which axis carries ticks vs categories.
    ///
    /// The gutter axis now holds different labels, so the host should
    /// re-measure and call a gutter refresh next.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation == orientation {
            return;
        }
        self.orientation = orientation;
        debug!(?orientation, "set orientation");
    }

    /// Installs host-supplied label formatters.
    pub fn set_formatters(&mut self, formatters: ValueFormatters) {
        self.formatters = formatters;
    }

    fn recompute_axis(&mut self) {
        self.analysis = analyze(&self.values);
        self.ticks = generate_ticks(
            self.analysis.axis_min,
            self.analysis.axis_max,
            self.num_of_ticks,
            self.granularity,
        );
    }
}
