//! Display formatting for crypto and fiat amounts.

use rust_decimal::Decimal;

use crate::amount::{round_half_up, CRYPTO_FRACTION_DIGITS, FIAT_FRACTION_DIGITS};
use crate::config::FormatConfig;

/// Renders amounts as fixed-precision strings with currency codes.
///
/// Crypto amounts always carry 8 fractional digits, fiat amounts 2.
/// Extra precision is rounded half-up; missing digits are zero padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFormatter {
    crypto_symbol: String,
    fiat_symbol: String,
    group_separator: Option<char>,
}

impl Default for AmountFormatter {
    fn default() -> Self {
        Self::from(&FormatConfig::default())
    }
}

impl From<&FormatConfig> for AmountFormatter {
    fn from(config: &FormatConfig) -> Self {
        Self::new(
            config.crypto_symbol.clone(),
            config.fiat_symbol.clone(),
            config.group_separator,
        )
    }
}

impl AmountFormatter {
    pub fn new(
        crypto_symbol: impl Into<String>,
        fiat_symbol: impl Into<String>,
        group_separator: Option<char>,
    ) -> Self {
        Self {
            crypto_symbol: crypto_symbol.into(),
            fiat_symbol: fiat_symbol.into(),
            group_separator,
        }
    }

    pub fn format_crypto(&self, amount: Decimal) -> String {
        self.format_fixed(amount, CRYPTO_FRACTION_DIGITS)
    }

    pub fn format_crypto_with_symbol(&self, amount: Decimal) -> String {
        format!("{} {}", self.crypto_symbol, self.format_crypto(amount))
    }

    pub fn format_fiat(&self, amount: Decimal) -> String {
        self.format_fixed(amount, FIAT_FRACTION_DIGITS)
    }

    pub fn format_fiat_with_symbol(&self, amount: Decimal) -> String {
        format!("{} {}", self.fiat_symbol, self.format_fiat(amount))
    }

    /// `"BTC 1 = EUR 50268.47"`
    pub fn format_exchange_rate(&self, price: Decimal) -> String {
        format!(
            "{} 1 = {}",
            self.crypto_symbol,
            self.format_fiat_with_symbol(price)
        )
    }

    fn format_fixed(&self, amount: Decimal, digits: u32) -> String {
        let rounded = round_half_up(amount, digits);
        // Rounding a tiny negative value can leave a signed zero.
        let rounded = if rounded.is_zero() {
            Decimal::ZERO
        } else {
            rounded
        };
        let plain = format!("{:.*}", digits as usize, rounded);
        match self.group_separator {
            Some(separator) => group_integer_digits(&plain, separator),
            None => plain,
        }
    }
}

/// Insert `separator` between every three integer digits of `plain`.
fn group_integer_digits(plain: &str, separator: char) -> String {
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(plain.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
