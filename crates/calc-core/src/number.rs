//! # Number Module
//!
//! Converts between operand strings and `f64` values.
//!
//! ## Why Strings At All?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  OPERANDS ARE TYPED, NOT COMPUTED                                       │
//! │                                                                         │
//! │  Keys pressed:   0  .  5  0                                             │
//! │  As a String:    "0.50"   ✅ what the user sees while typing            │
//! │  As an f64:      0.5      ❌ leading/trailing zeros are gone            │
//! │                                                                         │
//! │  OUR SOLUTION: accumulate text, convert only when computing             │
//! │    parse_operand("0.50") ──► 0.5 ──► apply operator ──► format_result   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use calc_core::number::{format_result, parse_operand};
//!
//! assert_eq!(parse_operand("12.5"), 12.5);
//! assert_eq!(parse_operand("1.2.3"), 1.2); // longest numeric prefix wins
//! assert!(parse_operand(".").is_nan());
//!
//! assert_eq!(format_result(8.0), "8");
//! assert_eq!(format_result(1.0 / 0.0), "inf");
//! ```

/// Parses an operand the way a lenient "parse float" conversion does.
///
/// ## Rules
/// - Leading whitespace is skipped
/// - The longest prefix matching `[+-]digits[.digits][e[+-]digits]` is used,
///   everything after it is ignored (`"1.2.3"` → `1.2`)
/// - `inf`, `-inf` and `NaN` (as written by [`format_result`]) parse back to
///   themselves, so a chain started by a division by zero keeps propagating
/// - Anything without a numeric prefix is NaN
///
/// Never fails: malformed operands are accepted, not rejected.
pub fn parse_operand(text: &str) -> f64 {
    let text = text.trim_start();
    let end = numeric_prefix_len(text);

    if end == 0 {
        return parse_special(text);
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Converts a computed value to its canonical display string.
///
/// This is Rust's `f64` `Display` output, unmodified:
///
/// | Value        | String  |
/// |--------------|---------|
/// | `8.0`        | `"8"`   |
/// | `0.5`        | `"0.5"` |
/// | `1.0 / 0.0`  | `"inf"` |
/// | `-1.0 / 0.0` | `"-inf"`|
/// | `0.0 / 0.0`  | `"NaN"` |
pub fn format_result(value: f64) -> String {
    value.to_string()
}

/// Byte length of the longest valid decimal prefix of `text` (0 if none).
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    end
}

/// Non-finite values written back into an operand by a previous result.
fn parse_special(text: &str) -> f64 {
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    if rest.starts_with("inf") {
        if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else {
        f64::NAN
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_operands() {
        assert_eq!(parse_operand("0"), 0.0);
        assert_eq!(parse_operand("42"), 42.0);
        assert_eq!(parse_operand("007"), 7.0);
        assert_eq!(parse_operand("3.25"), 3.25);
        assert_eq!(parse_operand("-5"), -5.0);
    }

    #[test]
    fn test_parse_partial_decimals() {
        // Trailing and leading decimal points are legal while typing
        assert_eq!(parse_operand("5."), 5.0);
        assert_eq!(parse_operand(".5"), 0.5);
    }

    #[test]
    fn test_parse_malformed_uses_prefix() {
        assert_eq!(parse_operand("1.2.3"), 1.2);
        assert_eq!(parse_operand("12..4"), 12.0);
        assert_eq!(parse_operand(".5."), 0.5);
    }

    #[test]
    fn test_parse_without_numeric_prefix_is_nan() {
        assert!(parse_operand("").is_nan());
        assert!(parse_operand(".").is_nan());
        assert!(parse_operand("..5").is_nan());
        assert!(parse_operand("-").is_nan());
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(parse_operand("1e3"), 1000.0);
        assert_eq!(parse_operand("2.5e-1"), 0.25);
        // Dangling exponent marker is not part of the number
        assert_eq!(parse_operand("4e"), 4.0);
        assert_eq!(parse_operand("4e+"), 4.0);
    }

    #[test]
    fn test_parse_special_values_round_trip() {
        assert_eq!(parse_operand(&format_result(f64::INFINITY)), f64::INFINITY);
        assert_eq!(
            parse_operand(&format_result(f64::NEG_INFINITY)),
            f64::NEG_INFINITY
        );
        assert!(parse_operand(&format_result(f64::NAN)).is_nan());
    }

    #[test]
    fn test_parse_special_with_trailing_digits() {
        // Digits typed after an "inf" result keep it infinite
        assert_eq!(parse_operand("inf5"), f64::INFINITY);
        // Deleting into the middle of "inf" leaves nothing numeric
        assert!(parse_operand("in").is_nan());
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(8.0), "8");
        assert_eq!(format_result(0.5), "0.5");
        assert_eq!(format_result(-2.0), "-2");
        assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_result(7.0 / 0.0), "inf");
        assert_eq!(format_result(-7.0 / 0.0), "-inf");
        assert_eq!(format_result(0.0 / 0.0), "NaN");
    }
}
