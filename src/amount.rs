//! Decimal arithmetic shared by the trade flow.
//!
//! Every amount is a `rust_decimal::Decimal`. Results are rounded half-up
//! (ties away from zero) to a fixed number of fractional digits.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use thiserror::Error;

/// Fractional digits of a crypto amount.
pub const CRYPTO_FRACTION_DIGITS: u32 = 8;

/// Fractional digits of a fiat amount.
pub const FIAT_FRACTION_DIGITS: u32 = 2;

/// Errors from dividing two amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DivisionError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("division result out of range")]
    Overflow,
}

/// Errors from parsing user-typed amount text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
    #[error("amount is empty")]
    Empty,

    #[error("'{input}' is not a number")]
    Invalid { input: String },

    #[error("amount must not be negative")]
    Negative,
}

/// Round to `digits` fractional digits, ties away from zero.
pub fn round_half_up(value: Decimal, digits: u32) -> Decimal {
    value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
}

/// `numerator / denominator`, rounded half-up to `digits` fractional digits.
pub fn divide_half_up(
    numerator: Decimal,
    denominator: Decimal,
    digits: u32,
) -> Result<Decimal, DivisionError> {
    if denominator.is_zero() {
        return Err(DivisionError::DivisionByZero);
    }
    numerator
        .checked_div(denominator)
        .map(|quotient| round_half_up(quotient, digits))
        .ok_or(DivisionError::Overflow)
}

/// Fiat amount converted to crypto at `price` (fiat per one crypto unit).
pub fn fiat_to_crypto(fiat_amount: Decimal, price: Decimal) -> Result<Decimal, DivisionError> {
    divide_half_up(fiat_amount, price, CRYPTO_FRACTION_DIGITS)
}

/// Parse a non-negative amount as typed by the user.
///
/// Accepts plain decimals (`"15"`, `"0.5"`) and scientific notation
/// (`"1e3"`). Surrounding whitespace is not stripped.
pub fn parse_amount(input: &str) -> Result<Decimal, AmountParseError> {
    if input.is_empty() {
        return Err(AmountParseError::Empty);
    }

    let amount = Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .map_err(|_| AmountParseError::Invalid {
            input: input.to_string(),
        })?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(AmountParseError::Negative);
    }
    Ok(amount)
}
