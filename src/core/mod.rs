pub mod analysis;
pub mod gutter;
pub mod measure;
pub mod percent;
pub mod ticks;
pub mod types;

pub use analysis::{AxisAnalysis, analyze};
pub use gutter::{GutterWidthUpdate, GutterWidths, calculate_gutter_widths, updated_gutter_width};
pub use measure::{ScrollExtent, TextMeasurer, longest_label, scrollbar_size};
pub use percent::{is_positive_bar, size_in_percentages};
pub use ticks::{TickBuffer, generate_default_ticks, generate_ticks};
pub use types::{AxisSide, CategoryLabel, DataItem, Orientation, XAxisPosition};
