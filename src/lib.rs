//! barchart-rs: numeric and layout core for interactive bar-chart widgets.
//!
//! This crate implements the computational model of a bar chart (sign/range
//! analysis of the dataset, value-axis tick generation, percentage-based bar
//! sizing, and axis-gutter width negotiation) while leaving rendering, DOM,
//! and styling to host collaborators that supply measured inputs (container
//! width, rendered label widths, pointer deltas) and consume numeric outputs.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod telemetry;

pub use api::{BarChartConfig, BarChartEngine};
pub use error::{BarChartError, BarChartResult};
