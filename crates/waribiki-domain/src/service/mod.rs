//! Domain services

pub mod discount_calculator;
pub mod rounding;

pub use discount_calculator::calculate;
pub use rounding::{half_fare, round_to_ten, DISCOUNT_PERCENT, ROUNDING_UNIT_YEN};
