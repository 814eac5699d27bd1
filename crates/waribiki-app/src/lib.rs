//! Application service layer - use cases, config, table selection

pub mod app;
pub mod config;
pub mod input;
pub mod repository;
