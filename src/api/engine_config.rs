use serde::{Deserialize, Serialize};

use crate::core::ticks::{DEFAULT_GRANULARITY, DEFAULT_NUM_OF_TICKS};
use crate::core::{AxisSide, Orientation, XAxisPosition};
use crate::error::{BarChartError, BarChartResult};

/// Engine bootstrap configuration.
///
/// Serializable so host applications can persist and reload chart setup
/// without inventing an ad-hoc format. Formatters are injected at runtime and
/// deliberately excluded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    #[serde(default = "default_orientation")]
    pub orientation: Orientation,
    #[serde(default = "default_axis_side")]
    pub axis_side: AxisSide,
    #[serde(default = "default_x_axis_position")]
    pub x_axis_position: XAxisPosition,
    #[serde(default = "default_num_of_ticks")]
    pub num_of_ticks: usize,
    #[serde(default = "default_granularity")]
    pub granularity: f64,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            orientation: default_orientation(),
            axis_side: default_axis_side(),
            x_axis_position: default_x_axis_position(),
            num_of_ticks: default_num_of_ticks(),
            granularity: default_granularity(),
        }
    }
}

impl BarChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_axis_side(mut self, side: AxisSide) -> Self {
        self.axis_side = side;
        self
    }

    #[must_use]
    pub fn with_x_axis_position(mut self, position: XAxisPosition) -> Self {
        self.x_axis_position = position;
        self
    }

    #[must_use]
    pub fn with_num_of_ticks(mut self, num_of_ticks: usize) -> Self {
        self.num_of_ticks = num_of_ticks;
        self
    }

    #[must_use]
    pub fn with_granularity(mut self, granularity: f64) -> Self {
        self.granularity = granularity;
        self
    }

    /// Checks numeric fields the tick generator depends on.
    pub fn validate(&self) -> BarChartResult<()> {
        if !self.granularity.is_finite() || self.granularity <= 0.0 {
            return Err(BarChartError::InvalidConfig(
                "granularity must be finite and positive".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> BarChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| BarChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> BarChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| BarChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_orientation() -> Orientation {
    Orientation::Vertical
}

fn default_axis_side() -> AxisSide {
    AxisSide::Left
}

fn default_x_axis_position() -> XAxisPosition {
    XAxisPosition::Bottom
}

fn default_num_of_ticks() -> usize {
    DEFAULT_NUM_OF_TICKS
}

fn default_granularity() -> f64 {
    DEFAULT_GRANULARITY
}
