// SPDX-FileCopyrightText: 2026 Virtshop Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Amount parsing.
//!
//! An amount is 1 to 3 ASCII digits immediately followed by the literal
//! suffix `кк` (Cyrillic, "millions" in player slang) and nothing else.
//! The numeric value must lie in 1..=100.

use thiserror::Error;

pub const MIN_UNITS: u32 = 1;
pub const MAX_UNITS: u32 = 100;

/// The suffix players write amounts with. Latin `kk` does not qualify.
const UNIT_SUFFIX: &str = "кк";

/// Why an amount string was rejected. Both reasons surface to the user
/// as the same hint; the distinction exists for logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Wrong shape: missing suffix, non-digit characters, or more than
    /// three digits.
    #[error("amount must be 1-3 digits followed by `кк`")]
    Malformed,
    /// Right shape, value outside the accepted range.
    #[error("amount {0}кк is outside the accepted range")]
    OutOfRange(u32),
}

/// Parses an amount in millions of virts.
pub fn parse_amount(text: &str) -> Result<u32, AmountError> {
    let digits = text.strip_suffix(UNIT_SUFFIX).ok_or(AmountError::Malformed)?;
    if digits.is_empty() || digits.len() > 3 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::Malformed);
    }
    // At most three ASCII digits, so this cannot overflow or fail.
    let units: u32 = digits.parse().map_err(|_| AmountError::Malformed)?;
    if !(MIN_UNITS..=MAX_UNITS).contains(&units) {
        return Err(AmountError::OutOfRange(units));
    }
    Ok(units)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_value_in_range_parses() {
        for units in MIN_UNITS..=MAX_UNITS {
            let text = format!("{units}кк");
            assert_eq!(parse_amount(&text), Ok(units), "failed for {text}");
        }
    }

    #[test]
    fn out_of_range_values_are_rejected_with_their_value() {
        assert_eq!(parse_amount("0кк"), Err(AmountError::OutOfRange(0)));
        assert_eq!(parse_amount("101кк"), Err(AmountError::OutOfRange(101)));
        assert_eq!(parse_amount("999кк"), Err(AmountError::OutOfRange(999)));
        assert_eq!(parse_amount("00кк"), Err(AmountError::OutOfRange(0)));
    }

    #[test]
    fn leading_zeros_are_numerically_fine() {
        assert_eq!(parse_amount("012кк"), Ok(12));
        assert_eq!(parse_amount("001кк"), Ok(1));
    }

    #[test]
    fn malformed_shapes_are_rejected() {
        for text in [
            "12",      // no suffix
            "12к",     // half a suffix
            "12ккк",   // suffix repeated
            "кк",      // no digits
            "12kk",    // Latin lookalike suffix
            "12 кк",   // inner whitespace
            " 12кк",   // leading whitespace
            "12кк ",   // trailing whitespace
            "abcкк",   // letters
            "1234кк",  // four digits
            "12.5кк",  // fractions
            "-12кк",   // signs
            "",
        ] {
            assert_eq!(parse_amount(text), Err(AmountError::Malformed), "accepted {text:?}");
        }
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert_eq!(parse_amount("1кк"), Ok(1));
        assert_eq!(parse_amount("100кк"), Ok(100));
    }
}
