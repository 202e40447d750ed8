//! Monetary types for stake and probability representation.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use super::error::InvalidBetError;

/// Currency amount represented as a Decimal for precision.
pub type Amount = Decimal;

/// Pool share in `[0, 1]` represented as a Decimal.
pub type Probability = Decimal;

/// Decimal places used when displaying currency and percentages.
pub const DISPLAY_DP: u32 = 2;

/// Convert a floating point stake into an [`Amount`].
///
/// # Errors
///
/// Returns [`InvalidBetError::NonFiniteAmount`] for NaN, infinities, or
/// values outside the decimal range, and [`InvalidBetError::NonPositiveAmount`]
/// for zero or negative stakes.
pub fn stake_from_f64(raw: f64) -> Result<Amount, InvalidBetError> {
    if !raw.is_finite() {
        return Err(InvalidBetError::NonFiniteAmount {
            raw: raw.to_string(),
        });
    }
    let amount = Decimal::from_f64(raw).ok_or_else(|| InvalidBetError::NonFiniteAmount {
        raw: raw.to_string(),
    })?;
    if amount <= Decimal::ZERO {
        return Err(InvalidBetError::NonPositiveAmount { amount });
    }
    Ok(amount)
}

/// Round a currency amount for display.
#[must_use]
pub fn display_amount(amount: Amount) -> Amount {
    amount.round_dp(DISPLAY_DP)
}

/// Express a probability as a percentage rounded for display.
#[must_use]
pub fn display_percent(probability: Probability) -> Decimal {
    (probability * Decimal::ONE_HUNDRED).round_dp(DISPLAY_DP)
}
