//! Calculation input and result

use serde::{Deserialize, Serialize};
use waribiki_types::{DisabilityClass, TravelMode, Yen};

use super::operator::OperatorRule;

/// One calculation request. Fares must already be coerced to non-negative integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// 運賃
    pub base_fare: Yen,
    /// 特急料金
    pub express_fare: Yen,
    pub rule: OperatorRule,
    /// 片道の営業キロが規定を超える
    pub is_over_distance: bool,
    pub disability_class: DisabilityClass,
    pub travel_mode: TravelMode,
}

/// Amounts to pay for the passenger and, when present, the caregiver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub travel_mode: TravelMode,
    pub passenger_base: Yen,
    pub passenger_express: Yen,
    pub caregiver_base: Yen,
    pub caregiver_express: Yen,
}

/// Totals saturate at `Yen::MAX` instead of overflowing
impl CalculationResult {
    pub fn passenger_total(&self) -> Yen {
        self.passenger_base.saturating_add(self.passenger_express)
    }

    /// `None` when traveling solo
    pub fn caregiver_total(&self) -> Option<Yen> {
        self.travel_mode
            .has_caregiver()
            .then(|| self.caregiver_base.saturating_add(self.caregiver_express))
    }

    pub fn grand_total(&self) -> Yen {
        self.passenger_total()
            .saturating_add(self.caregiver_total().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grand_total_with_caregiver() {
        let result = CalculationResult {
            travel_mode: TravelMode::WithCaregiver,
            passenger_base: 3190,
            passenger_express: 4920,
            caregiver_base: 3190,
            caregiver_express: 4920,
        };
        assert_eq!(result.passenger_total(), 8110);
        assert_eq!(result.caregiver_total(), Some(8110));
        assert_eq!(result.grand_total(), 16420);
    }

    #[test]
    fn test_grand_total_solo_is_passenger_only() {
        let result = CalculationResult {
            travel_mode: TravelMode::Solo,
            passenger_base: 50,
            passenger_express: 50,
            caregiver_base: 0,
            caregiver_express: 0,
        };
        assert_eq!(result.caregiver_total(), None);
        assert_eq!(result.grand_total(), 100);
    }

    #[test]
    fn test_totals_saturate_at_max() {
        let result = CalculationResult {
            travel_mode: TravelMode::WithCaregiver,
            passenger_base: Yen::MAX / 2,
            passenger_express: Yen::MAX,
            caregiver_base: Yen::MAX / 2,
            caregiver_express: 1,
        };
        assert_eq!(result.passenger_total(), Yen::MAX);
        assert_eq!(result.caregiver_total(), Some(Yen::MAX / 2 + 1));
        assert_eq!(result.grand_total(), Yen::MAX);
    }
}
