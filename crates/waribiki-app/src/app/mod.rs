//! Application use cases

pub mod fare_service;
pub mod notice;

pub use fare_service::{FareRequest, FareService, Prefill, Quote};
pub use notice::{distance_notice, DistanceNotice};
