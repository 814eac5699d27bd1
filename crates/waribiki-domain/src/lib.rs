//! Domain layer for disability fare discounts
//!
//! Holds the operator rule registry, the route fare table, the 10-yen rounding
//! policy and the discount calculator. Everything here is pure: no I/O, no
//! shared mutable state.

pub mod constants;
pub mod model;
pub mod repository;
pub mod service;

pub use constants::{lookup_fare, lookup_rule};
pub use model::*;
pub use repository::{FareRepository, RuleRepository};
pub use service::{calculate, round_to_ten};
