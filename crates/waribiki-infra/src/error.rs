//! Errors raised while loading rule and fare tables

use thiserror::Error;
use waribiki_types::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Unknown operator in row {row}: {id}")]
    UnknownOperator { row: usize, id: String },

    #[error("Operator listed twice in row {row}: {id}")]
    DuplicateOperator { row: usize, id: String },

    #[error("Invalid fare in row {row}, column {column}: {value}")]
    InvalidFare {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid route in row {row}: {from} - {to}")]
    InvalidRoute { row: usize, from: String, to: String },

    #[error("Route listed twice in row {row}: {from} - {to}")]
    DuplicateRoute { row: usize, from: String, to: String },
}

impl From<TableError> for Error {
    fn from(e: TableError) -> Self {
        Error::Table(e.to_string())
    }
}
