use thiserror::Error;

pub type Result<T> = std::result::Result<T, CogError>;

#[derive(Error, Debug)]
pub enum CogError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Could not read or write the element table: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not serialize the report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Row {row} has a non-finite value in column {column}")]
    NonFiniteValue { row: usize, column: &'static str },
    #[error("A table needs at least one row, got {0}")]
    InvalidRowCount(usize),
    #[error("Mass range [{min}, {max}] must be positive and non-empty")]
    InvalidMassRange { min: f64, max: f64 },
    #[error("Position bounds must be finite and non-negative, got {0}")]
    InvalidBounds(f64),
    #[error("Unknown length unit {0:?}")]
    UnknownUnit(String),
}
