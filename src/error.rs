use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("Undefined chart type \"{0}\".")]
    UnknownChartType(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
