use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of base-unit digits in one native unit of the ledger currency.
pub const NATIVE_DECIMALS: u32 = 18;

const BASE_UNITS_PER_NATIVE: u128 = 10u128.pow(NATIVE_DECIMALS);

/// A value transfer amount in the ledger's smallest indivisible
/// denomination. Conversions from human-readable native units are exact
/// integer arithmetic; there is no floating point anywhere in the type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u128);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountParseError {
    #[error("empty amount string")]
    Empty,
    #[error("invalid digit in amount '{0}'")]
    InvalidDigit(String),
    #[error("amount '{0}' has more than {NATIVE_DECIMALS} fractional digits")]
    TooPrecise(String),
    #[error("amount '{0}' overflows the base-unit range")]
    Overflow(String),
}

impl Amount {
    pub const ZERO: Amount = Amount(0);

    pub const fn from_base_units(base_units: u128) -> Self {
        Self(base_units)
    }

    pub const fn base_units(self) -> u128 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Converts a decimal string in native units ("0.01", "1", "2.5")
    /// to base units. Rejects anything that cannot be represented
    /// exactly.
    pub fn from_native_str(text: &str) -> Result<Self, AmountParseError> {
        let text = text.trim();
        if text.is_empty() || text == "." {
            return Err(AmountParseError::Empty);
        }

        let (whole, frac) = match text.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (text, ""),
        };
        if frac.len() as u32 > NATIVE_DECIMALS {
            return Err(AmountParseError::TooPrecise(text.to_string()));
        }

        let parse_part = |part: &str| -> Result<u128, AmountParseError> {
            if part.is_empty() {
                return Ok(0);
            }
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AmountParseError::InvalidDigit(text.to_string()));
            }
            part.parse::<u128>()
                .map_err(|_| AmountParseError::Overflow(text.to_string()))
        };

        let whole_units = parse_part(whole)?;
        let frac_scale = 10u128.pow(NATIVE_DECIMALS - frac.len() as u32);
        let frac_units = parse_part(frac)?
            .checked_mul(frac_scale)
            .ok_or_else(|| AmountParseError::Overflow(text.to_string()))?;

        whole_units
            .checked_mul(BASE_UNITS_PER_NATIVE)
            .and_then(|base| base.checked_add(frac_units))
            .map(Amount)
            .ok_or_else(|| AmountParseError::Overflow(text.to_string()))
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_hundredth_of_a_native_unit_exactly() {
        let amount = Amount::from_native_str("0.01").expect("parse");
        assert_eq!(amount.base_units(), 10_000_000_000_000_000);
    }

    #[test]
    fn converts_whole_and_mixed_amounts() {
        assert_eq!(
            Amount::from_native_str("1").expect("parse").base_units(),
            BASE_UNITS_PER_NATIVE
        );
        assert_eq!(
            Amount::from_native_str("2.5").expect("parse").base_units(),
            2 * BASE_UNITS_PER_NATIVE + BASE_UNITS_PER_NATIVE / 2
        );
        assert_eq!(
            Amount::from_native_str(".5").expect("parse").base_units(),
            BASE_UNITS_PER_NATIVE / 2
        );
    }

    #[test]
    fn smallest_representable_fraction_is_one_base_unit() {
        let amount = Amount::from_native_str("0.000000000000000001").expect("parse");
        assert_eq!(amount.base_units(), 1);
    }

    #[test]
    fn rejects_unrepresentable_precision() {
        let err = Amount::from_native_str("0.0000000000000000001").expect_err("too precise");
        assert!(matches!(err, AmountParseError::TooPrecise(_)));
    }

    #[test]
    fn rejects_garbage_and_empty_input() {
        assert_eq!(Amount::from_native_str(""), Err(AmountParseError::Empty));
        assert_eq!(Amount::from_native_str("."), Err(AmountParseError::Empty));
        assert!(matches!(
            Amount::from_native_str("0.0a"),
            Err(AmountParseError::InvalidDigit(_))
        ));
        assert!(matches!(
            Amount::from_native_str("-1"),
            Err(AmountParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn rejects_overflowing_whole_part() {
        let huge = "9".repeat(60);
        assert!(matches!(
            Amount::from_native_str(&huge),
            Err(AmountParseError::Overflow(_))
        ));
    }
}
