use thiserror::Error;

pub type BarChartResult<T> = Result<T, BarChartError>;

#[derive(Debug, Error)]
pub enum BarChartError {
    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
