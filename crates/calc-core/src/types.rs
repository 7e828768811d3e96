//! # Domain Types
//!
//! Core domain types used throughout the calculator.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Digit       │   │    Operator     │   │       Key       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  '0'..='9'      │   │  Add       (+)  │   │  Digit(Digit)   │       │
//! │  │  '.'            │   │  Subtract  (-)  │   │  Operator(Op)   │       │
//! │  │                 │   │  Multiply  (*)  │   │  Clear          │       │
//! │  │                 │   │  Divide    (/)  │   │  Delete         │       │
//! │  └─────────────────┘   └─────────────────┘   │  Equals         │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────────────────────────────┐     │
//! │  │     Phase       │   │        CalculatorSnapshot               │     │
//! │  │  ─────────────  │   │  ─────────────────────────────────────  │     │
//! │  │  EnteringFirst  │   │  display, firstOperand, secondOperand,  │     │
//! │  │  OperatorChosen │   │  pendingOperator, lastResult, phase     │     │
//! │  │  EnteringSecond │   │  (what the frontend renders)            │     │
//! │  └─────────────────┘   └─────────────────────────────────────────┘     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Digit
// =============================================================================

/// A single character that may be appended to an operand.
///
/// Only `0`-`9` and the decimal point are representable. Well-formedness of
/// the resulting operand (e.g. a second decimal point) is NOT checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    /// The decimal point.
    pub const POINT: Digit = Digit('.');

    /// Creates a digit from a character.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::Digit;
    ///
    /// assert!(Digit::new('7').is_ok());
    /// assert!(Digit::new('.').is_ok());
    /// assert!(Digit::new('a').is_err());
    /// ```
    pub fn new(ch: char) -> CoreResult<Self> {
        if ch.is_ascii_digit() || ch == '.' {
            Ok(Digit(ch))
        } else {
            Err(CoreError::InvalidDigit(ch))
        }
    }

    /// Builds a digit from a character already known to be valid.
    pub(crate) const fn known(ch: char) -> Self {
        Digit(ch)
    }

    /// Returns the underlying character.
    #[inline]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Digit {
    type Error = CoreError;

    fn try_from(ch: char) -> CoreResult<Self> {
        Digit::new(ch)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Operator
// =============================================================================

/// One of the four binary operators.
///
/// Serialized as its ASCII symbol (`"+"`, `"-"`, `"*"`, `"/"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Canonical ASCII symbol.
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Glyph shown on the keypad button.
    pub const fn glyph(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Applies the operator with IEEE-754 semantics.
    ///
    /// Division has no zero guard: `x / 0` is `±inf` and `0 / 0` is NaN.
    ///
    /// ## Example
    /// ```rust
    /// use calc_core::Operator;
    ///
    /// assert_eq!(Operator::Add.apply(5.0, 3.0), 8.0);
    /// assert_eq!(Operator::Divide.apply(7.0, 0.0), f64::INFINITY);
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

impl FromStr for Operator {
    type Err = CoreError;

    /// Accepts the ASCII symbols, the keypad glyphs (`×`, `÷`) and the
    /// look-alikes `x` (multiply) and `−` (U+2212 minus sign).
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Subtract),
            "*" | "×" | "x" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            other => Err(CoreError::UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// =============================================================================
// Key
// =============================================================================

/// One discrete action forwarded by the presentation layer (one button press).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Digit(Digit),
    Operator(Operator),
    Clear,
    Delete,
    Equals,
}

/// Coarse category of a key, used by the frontend for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum KeyKind {
    Digit,
    Operator,
    Clear,
    Delete,
    Equals,
}

impl Key {
    /// Caption printed on the button.
    ///
    /// `Key::from_str(key.label())` always yields `key` back.
    pub fn label(&self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Operator(op) => op.glyph().to_string(),
            Key::Clear => "CLEAR".to_string(),
            Key::Delete => "DEL".to_string(),
            Key::Equals => "=".to_string(),
        }
    }

    pub const fn kind(&self) -> KeyKind {
        match self {
            Key::Digit(_) => KeyKind::Digit,
            Key::Operator(_) => KeyKind::Operator,
            Key::Clear => KeyKind::Clear,
            Key::Delete => KeyKind::Delete,
            Key::Equals => KeyKind::Equals,
        }
    }
}

impl FromStr for Key {
    type Err = CoreError;

    /// Parses a button label.
    ///
    /// ## Accepted Labels
    /// - `"0"`..`"9"`, `"."` → [`Key::Digit`]
    /// - `"+"`, `"-"`, `"−"`, `"*"`, `"×"`, `"x"`, `"/"`, `"÷"` → [`Key::Operator`]
    /// - `"CLEAR"`, `"C"` → [`Key::Clear`]
    /// - `"DEL"` → [`Key::Delete`]
    /// - `"="` → [`Key::Equals`]
    fn from_str(label: &str) -> CoreResult<Self> {
        match label {
            "CLEAR" | "C" => return Ok(Key::Clear),
            "DEL" => return Ok(Key::Delete),
            "=" => return Ok(Key::Equals),
            _ => {}
        }

        if let Ok(op) = label.parse::<Operator>() {
            return Ok(Key::Operator(op));
        }

        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Digit::new(ch)
                .map(Key::Digit)
                .map_err(|_| CoreError::UnknownKey(label.to_string())),
            _ => Err(CoreError::UnknownKey(label.to_string())),
        }
    }
}

// =============================================================================
// Phase
// =============================================================================

/// Where the calculator is in its input cycle.
///
/// ```text
///                 choose_operator            input_digit
///  EnteringFirst ────────────────► OperatorChosen ──────────► EnteringSecond
///        ▲                              │  ▲ delete_last            │
///        │                              │  └────────────────────────┤
///        └──── compute_result / clear ──┴───────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Phase {
    /// No operator pending; digits go to the first operand.
    EnteringFirst,
    /// Operator pending, second operand still empty.
    OperatorChosen,
    /// Operator pending, second operand being typed.
    EnteringSecond,
}

// =============================================================================
// Snapshot
// =============================================================================

/// Read-only view of the calculator handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CalculatorSnapshot {
    /// Text to render: second operand, else first operand, else last result,
    /// else `"0"`.
    pub display: String,

    pub first_operand: String,

    pub second_operand: String,

    pub pending_operator: Option<Operator>,

    pub last_result: Option<String>,

    pub phase: Phase,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_validation() {
        for ch in "0123456789.".chars() {
            assert_eq!(Digit::new(ch).map(Digit::as_char), Ok(ch));
        }
        assert_eq!(Digit::new('a'), Err(CoreError::InvalidDigit('a')));
        assert_eq!(Digit::try_from('+'), Err(CoreError::InvalidDigit('+')));
        assert_eq!(Digit::new('٣'), Err(CoreError::InvalidDigit('٣')));
    }

    #[test]
    fn test_operator_parsing() {
        assert_eq!("+".parse(), Ok(Operator::Add));
        assert_eq!("-".parse(), Ok(Operator::Subtract));
        assert_eq!("−".parse(), Ok(Operator::Subtract));
        assert_eq!("×".parse(), Ok(Operator::Multiply));
        assert_eq!("*".parse(), Ok(Operator::Multiply));
        assert_eq!("x".parse(), Ok(Operator::Multiply));
        assert_eq!("÷".parse(), Ok(Operator::Divide));
        assert_eq!("/".parse(), Ok(Operator::Divide));
        assert_eq!("−".parse::<Key>(), Ok(Key::Operator(Operator::Subtract)));
        assert_eq!("x".parse::<Key>(), Ok(Key::Operator(Operator::Multiply)));
        assert_eq!(
            "%".parse::<Operator>(),
            Err(CoreError::UnknownOperator("%".to_string()))
        );
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(5.0, 3.0), 8.0);
        assert_eq!(Operator::Subtract.apply(5.0, 3.0), 2.0);
        assert_eq!(Operator::Multiply.apply(5.0, 3.0), 15.0);
        assert_eq!(Operator::Divide.apply(6.0, 3.0), 2.0);
    }

    #[test]
    fn test_divide_by_zero_is_not_guarded() {
        assert_eq!(Operator::Divide.apply(7.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-7.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_operator_serializes_as_symbol() {
        let json = serde_json::to_string(&Operator::ALL).unwrap();
        assert_eq!(json, r#"["+","-","*","/"]"#);

        let op: Operator = serde_json::from_str(r#""/""#).unwrap();
        assert_eq!(op, Operator::Divide);
    }

    #[test]
    fn test_key_parsing() {
        assert_eq!("7".parse(), Ok(Key::Digit(Digit::known('7'))));
        assert_eq!(".".parse(), Ok(Key::Digit(Digit::POINT)));
        assert_eq!("÷".parse(), Ok(Key::Operator(Operator::Divide)));
        assert_eq!("CLEAR".parse(), Ok(Key::Clear));
        assert_eq!("C".parse(), Ok(Key::Clear));
        assert_eq!("DEL".parse(), Ok(Key::Delete));
        assert_eq!("=".parse(), Ok(Key::Equals));

        for bad in ["", "77", "del", "a", " 7"] {
            assert_eq!(
                bad.parse::<Key>(),
                Err(CoreError::UnknownKey(bad.to_string())),
                "label {bad:?}"
            );
        }
    }

    #[test]
    fn test_key_label_parses_back() {
        let keys = [
            Key::Digit(Digit::known('0')),
            Key::Digit(Digit::POINT),
            Key::Operator(Operator::Multiply),
            Key::Operator(Operator::Divide),
            Key::Clear,
            Key::Delete,
            Key::Equals,
        ];
        for key in keys {
            assert_eq!(key.label().parse(), Ok(key));
        }
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = CalculatorSnapshot {
            display: "3".to_string(),
            first_operand: "5".to_string(),
            second_operand: "3".to_string(),
            pending_operator: Some(Operator::Add),
            last_result: None,
            phase: Phase::EnteringSecond,
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["display"], "3");
        assert_eq!(value["firstOperand"], "5");
        assert_eq!(value["pendingOperator"], "+");
        assert_eq!(value["lastResult"], serde_json::Value::Null);
        assert_eq!(value["phase"], "enteringSecond");
    }
}
