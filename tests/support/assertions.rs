use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tolerance for sums of scaled payouts; decimal division rounds at the 28th digit.
pub const EPSILON: Decimal = dec!(0.000000001);

pub fn assert_decimal_near(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}
