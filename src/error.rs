use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("cannot create logarithmic grid spanning over zero, including zero: [{low}, {high}]")]
    LogarithmicRangeSpansZero { low: f64, high: f64 },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
