//! Discount calculation over (disability class × travel mode)
//!
//! | class  | mode          | passenger base                    | caregiver   |
//! |--------|---------------|-----------------------------------|-------------|
//! | First  | WithCaregiver | 5割引                             | base 5割引  |
//! | First  | Solo          | 5割引 if over distance, else full | none        |
//! | Second | WithCaregiver | 5割引 if over distance, else full | full fare   |
//! | Second | Solo          | 5割引 if over distance, else full | none        |
//!
//! Express fares (特急料金) are never discounted. The over-distance flag only
//! counts when the operator has a distance limit at all.

use waribiki_types::{DisabilityClass, TravelMode, Yen};

use super::rounding::half_fare;
use crate::model::{CalculationInput, CalculationResult};

/// Compute the four fare amounts for one request
pub fn calculate(input: &CalculationInput) -> CalculationResult {
    let base = input.base_fare;
    let express = input.express_fare;
    let discounted = half_fare(base, input.rule.rounding);
    let distance_discounted = if input.rule.has_distance_discount() && input.is_over_distance {
        discounted
    } else {
        base
    };

    let (passenger_base, caregiver_base, caregiver_express): (Yen, Yen, Yen) =
        match (input.disability_class, input.travel_mode) {
            (DisabilityClass::First, TravelMode::WithCaregiver) => (discounted, discounted, express),
            (DisabilityClass::Second, TravelMode::WithCaregiver) => (distance_discounted, base, express),
            (_, TravelMode::Solo) => (distance_discounted, 0, 0),
        };

    CalculationResult {
        travel_mode: input.travel_mode,
        passenger_base,
        passenger_express: express,
        caregiver_base,
        caregiver_express,
    }
}
