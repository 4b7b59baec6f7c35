use std::fmt;

use serde::{Deserialize, Serialize};

/// Which axis carries the categories; the value axis carries the ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}

/// Side the resizable axis gutter is anchored to.
///
/// The anchor side decides the sign of pointer deltas during a drag and which
/// arrow key grows or shrinks the gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XAxisPosition {
    Top,
    Bottom,
}

/// Category label for one bar. Hosts may key bars by text or by number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryLabel {
    Text(String),
    Number(f64),
}

impl fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl From<&str> for CategoryLabel {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for CategoryLabel {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<f64> for CategoryLabel {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

/// One (category, value) pair. Sequence order is rendering order; categories
/// carry no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataItem {
    pub category: CategoryLabel,
    pub value: f64,
}

impl DataItem {
    #[must_use]
    pub fn new(category: impl Into<CategoryLabel>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }
}
