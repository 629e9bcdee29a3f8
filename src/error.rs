use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("unsupported series type: {kind}")]
    UnsupportedSeriesType { kind: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
