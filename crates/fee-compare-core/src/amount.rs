use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::FeeCalcError;
use crate::types::Money;
use crate::FeeCalcResult;

/// Characters dropped before parsing: thousands separators, currency
/// symbols and whitespace.
const IGNORED_CHARS: &[char] = &[',', '_', '$', '€', '£', '¥'];

/// Parse a free-text money amount such as `"25,000,000"` or `"$1,234.50"`.
///
/// Anything left over after stripping separators and currency symbols must
/// be a plain or scientific-notation decimal.
pub fn parse_amount(text: &str) -> FeeCalcResult<Money> {
    let cleaned: String = text
        .chars()
        .filter(|c| !IGNORED_CHARS.contains(c) && !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Err(FeeCalcError::InvalidAmount {
            input: text.to_string(),
        });
    }

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| FeeCalcError::InvalidAmount {
            input: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_thousands_separators() {
        assert_eq!(parse_amount("25,000,000").unwrap(), dec!(25_000_000));
        assert_eq!(parse_amount("100,000").unwrap(), dec!(100_000));
    }

    #[test]
    fn test_currency_symbol() {
        assert_eq!(parse_amount("$1,234.50").unwrap(), dec!(1234.50));
        assert_eq!(parse_amount("€ 1 000").unwrap(), dec!(1000));
        assert_eq!(parse_amount("  $42  ").unwrap(), dec!(42));
    }

    #[test]
    fn test_plain_and_scientific() {
        assert_eq!(parse_amount("0").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("1234.5678").unwrap(), dec!(1234.5678));
        assert_eq!(parse_amount("1e6").unwrap(), dec!(1_000_000));
    }

    #[test]
    fn test_non_numeric_is_an_error() {
        for bad in ["abc", "", "   ", "$", "12abc", "1.2.3", ",,,"] {
            match parse_amount(bad) {
                Err(FeeCalcError::InvalidAmount { input }) => assert_eq!(input, bad),
                other => panic!("expected InvalidAmount for {bad:?}, got {other:?}"),
            }
        }
    }
}
