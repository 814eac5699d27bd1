//! 10-yen rounding policy (端数処理)

use waribiki_types::{RoundingMode, Yen};

/// Discounted fares are brought to a multiple of this many yen
pub const ROUNDING_UNIT_YEN: Yen = 10;

/// Discount rate applied to base fares (5割引), in percent
pub const DISCOUNT_PERCENT: u64 = 50;

/// Round a non-negative amount to a multiple of 10 yen.
///
/// `Down` floors at the 10-yen digit. `Up` takes the ceiling: an exact multiple of
/// 10 is unchanged and any remainder goes to the next multiple.
/// Negative amounts are outside the domain; amounts past `Yen::MAX` saturate.
pub fn round_to_ten(amount: f64, mode: RoundingMode) -> Yen {
    let unit = ROUNDING_UNIT_YEN as f64;
    let tens = match mode {
        RoundingMode::Down => (amount / unit).floor(),
        RoundingMode::Up => (amount / unit).ceil(),
    };
    (tens as Yen).saturating_mul(ROUNDING_UNIT_YEN)
}

/// Discounted base fare under the given rounding mode.
///
/// Computed in integers, so the result is exact for every `Yen` value.
pub fn half_fare(base_fare: Yen, mode: RoundingMode) -> Yen {
    let scaled = u128::from(base_fare) * u128::from(DISCOUNT_PERCENT);
    let divisor = 100 * u128::from(ROUNDING_UNIT_YEN);
    let tens = match mode {
        RoundingMode::Down => scaled / divisor,
        RoundingMode::Up => scaled.div_ceil(divisor),
    };
    Yen::try_from(tens * u128::from(ROUNDING_UNIT_YEN)).unwrap_or(Yen::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_down_truncates() {
        assert_eq!(round_to_ten(52.5, RoundingMode::Down), 50);
        assert_eq!(round_to_ten(59.9, RoundingMode::Down), 50);
        assert_eq!(round_to_ten(3190.0, RoundingMode::Down), 3190);
    }

    #[test]
    fn test_round_up_ceils() {
        assert_eq!(round_to_ten(52.5, RoundingMode::Up), 60);
        assert_eq!(round_to_ten(50.1, RoundingMode::Up), 60);
        assert_eq!(round_to_ten(3190.0, RoundingMode::Up), 3190);
    }

    #[test]
    fn test_zero() {
        assert_eq!(round_to_ten(0.0, RoundingMode::Up), 0);
        assert_eq!(round_to_ten(0.0, RoundingMode::Down), 0);
        assert_eq!(round_to_ten(0.5, RoundingMode::Up), 10);
        assert_eq!(round_to_ten(0.5, RoundingMode::Down), 0);
    }

    #[test]
    fn test_down_le_amount_le_up() {
        let mut x = 0.0;
        while x < 1000.0 {
            let down = round_to_ten(x, RoundingMode::Down) as f64;
            let up = round_to_ten(x, RoundingMode::Up) as f64;
            assert!(down <= x && x <= up, "x={x} down={down} up={up}");
            x += 0.5;
        }
    }

    #[test]
    fn test_equal_at_multiples_of_ten() {
        for n in 0..200u64 {
            let x = (n * 10) as f64;
            assert_eq!(round_to_ten(x, RoundingMode::Down), n * 10);
            assert_eq!(round_to_ten(x, RoundingMode::Up), n * 10);
        }
    }

    #[test]
    fn test_idempotent() {
        for mode in [RoundingMode::Up, RoundingMode::Down] {
            let mut x = 0.0;
            while x < 500.0 {
                let once = round_to_ten(x, mode);
                assert_eq!(round_to_ten(once as f64, mode), once);
                x += 0.5;
            }
        }
    }

    #[test]
    fn test_half_fare() {
        assert_eq!(half_fare(6380, RoundingMode::Down), 3190);
        assert_eq!(half_fare(105, RoundingMode::Down), 50);
        assert_eq!(half_fare(105, RoundingMode::Up), 60);
        // 8910 / 2 = 4455
        assert_eq!(half_fare(8910, RoundingMode::Down), 4450);
        assert_eq!(half_fare(8910, RoundingMode::Up), 4460);
        assert_eq!(half_fare(0, RoundingMode::Up), 0);
    }

    #[test]
    fn test_half_fare_beyond_f64_precision() {
        // 2^53 + 1 is not representable as f64
        let base: Yen = (1 << 53) + 1;
        assert_eq!(half_fare(base, RoundingMode::Down), 4503599627370490);
        assert_eq!(half_fare(base, RoundingMode::Up), 4503599627370500);
    }

    #[test]
    fn test_half_fare_max() {
        // u64::MAX / 2 = 9223372036854775807.5
        assert_eq!(half_fare(Yen::MAX, RoundingMode::Down), 9223372036854775800);
        assert_eq!(half_fare(Yen::MAX, RoundingMode::Up), 9223372036854775810);
    }

    #[test]
    fn test_round_to_ten_saturates() {
        assert_eq!(round_to_ten(f64::MAX, RoundingMode::Up), Yen::MAX);
    }
}
