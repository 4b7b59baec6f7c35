mod bar_metrics;
mod data_controller;
mod engine_config;
mod gutter_controller;
mod labels;

pub use bar_metrics::BarMetrics;
pub use engine_config::BarChartConfig;
pub use labels::{CategoryFormatter, ValueFormatter, ValueFormatters};

use crate::core::{
    AxisAnalysis, AxisSide, DataItem, GutterWidths, Orientation, TickBuffer, XAxisPosition,
};
use crate::error::BarChartResult;
use crate::interaction::{GutterDragGesture, InteractionState};

/// Bar-chart computational state owned by one chart instance.
///
/// The engine holds the dataset and every derived value (sign/range analysis,
/// axis ticks, gutter widths, interaction state) and recomputes them in a
/// fixed order whenever the dataset or orientation changes. Rendering hosts
/// feed it measured inputs and read numeric outputs; the engine itself never
/// touches the DOM.
pub struct BarChartEngine {
    orientation: Orientation,
    axis_side: AxisSide,
    x_axis_position: XAxisPosition,
    num_of_ticks: usize,
    granularity: f64,
    formatters: ValueFormatters,
    data: Vec<DataItem>,
    values: Vec<f64>,
    analysis: AxisAnalysis,
    ticks: TickBuffer,
    gutter: GutterWidths,
    container_width: Option<f64>,
    interaction: InteractionState,
    drag: Option<GutterDragGesture>,
}

impl BarChartEngine {
    pub fn new(config: BarChartConfig) -> BarChartResult<Self> {
        config.validate()?;

        Ok(Self {
            orientation: config.orientation,
            axis_side: config.axis_side,
            x_axis_position: config.x_axis_position,
            num_of_ticks: config.num_of_ticks,
            granularity: config.granularity,
            formatters: ValueFormatters::default(),
            data: Vec::new(),
            values: Vec::new(),
            analysis: AxisAnalysis::default(),
            ticks: TickBuffer::new(),
            gutter: GutterWidths::default(),
            container_width: None,
            interaction: InteractionState::default(),
            drag: None,
        })
    }

    #[must_use]
    pub fn data(&self) -> &[DataItem] {
        &self.data
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn analysis(&self) -> &AxisAnalysis {
        &self.analysis
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    #[must_use]
    pub fn gutter_widths(&self) -> GutterWidths {
        self.gutter
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn axis_side(&self) -> AxisSide {
        self.axis_side
    }

    #[must_use]
    pub fn x_axis_position(&self) -> XAxisPosition {
        self.x_axis_position
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Gutter width as a whole percentage between its min and max bounds.
    #[must_use]
    pub fn gutter_percentage(&self) -> f64 {
        self.gutter.width_percentage()
    }

    /// Accessibility live-region text for the current gutter offset.
    #[must_use]
    pub fn gutter_offset_description(&self) -> String {
        self.gutter.offset_description()
    }
}
