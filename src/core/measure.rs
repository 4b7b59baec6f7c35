use crate::core::types::Orientation;

/// Text-measurement capability supplied by the host.
///
/// The core queries this on demand instead of subscribing to layout changes;
/// hosts typically back it with a hidden element styled like an axis label.
pub trait TextMeasurer {
    /// Rendered pixel width of `text`, rounded up by the host.
    fn text_width(&self, text: &str) -> f64;
}

/// Picks the label most likely to render widest: longest by character count,
/// ties broken by descending lexicographic order. Measuring only this one
/// candidate keeps gutter sizing to a single text measurement.
#[must_use]
pub fn longest_label<'a>(labels: &'a [String]) -> Option<&'a str> {
    labels
        .iter()
        .max_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.as_str().cmp(b.as_str())))
        .map(String::as_str)
}

/// Outer and inner pixel extents of the host's scrollable element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollExtent {
    pub width: f64,
    pub height: f64,
}

/// Scrollbar thickness along the scrolling direction for the given
/// orientation: the difference between outer and inner extents.
#[must_use]
pub fn scrollbar_size(orientation: Orientation, offset: ScrollExtent, client: ScrollExtent) -> f64 {
    match orientation {
        Orientation::Vertical => offset.height - client.height,
        Orientation::Horizontal => offset.width - client.width,
    }
}
