//! Infrastructure layer - table loaders and file-backed repositories

pub mod error;
pub mod fare_csv;
pub mod fare_loader;
pub mod persistence;
pub mod rule_loader;

pub use error::TableError;
