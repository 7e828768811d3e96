//! # Keypad Layout
//!
//! The button grid every frontend renders, top to bottom.
//!
//! ```text
//! ┌───────────────┬───────────────┐
//! │     CLEAR     │      DEL      │
//! ├───────┬───────┼───────┬───────┤
//! │   7   │   8   │   9   │   ÷   │
//! ├───────┼───────┼───────┼───────┤
//! │   4   │   5   │   6   │   ×   │
//! ├───────┼───────┼───────┼───────┤
//! │   1   │   2   │   3   │   -   │
//! ├───────┴───────┼───────┼───────┤
//! │       0       │   =   │   +   │
//! └───────────────┴───────┴───────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Digit, Key, KeyKind, Operator};

const fn digit(ch: char) -> Key {
    Key::Digit(Digit::known(ch))
}

const fn op(op: Operator) -> Key {
    Key::Operator(op)
}

/// Keypad rows in display order.
pub const KEYPAD: [&[Key]; 5] = [
    &[Key::Clear, Key::Delete],
    &[digit('7'), digit('8'), digit('9'), op(Operator::Divide)],
    &[digit('4'), digit('5'), digit('6'), op(Operator::Multiply)],
    &[digit('1'), digit('2'), digit('3'), op(Operator::Subtract)],
    &[digit('0'), Key::Equals, op(Operator::Add)],
];

/// A keypad button as sent to the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct KeypadButton {
    /// Caption, also the value passed back when the button is pressed.
    pub label: String,

    pub kind: KeyKind,

    /// Spans two columns (the zero key).
    pub wide: bool,
}

impl From<Key> for KeypadButton {
    fn from(key: Key) -> Self {
        KeypadButton {
            label: key.label(),
            kind: key.kind(),
            wide: key == digit('0'),
        }
    }
}

/// [`KEYPAD`] converted to serializable buttons.
pub fn keypad_rows() -> Vec<Vec<KeypadButton>> {
    KEYPAD
        .iter()
        .map(|row| row.iter().copied().map(KeypadButton::from).collect())
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
