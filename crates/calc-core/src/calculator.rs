//! # Calculator State
//!
//! The single mutable record behind the calculator and its state transitions.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator Operations                                │
//! │                                                                         │
//! │  Button Press        Operation               State Change               │
//! │  ────────────        ─────────               ────────────               │
//! │                                                                         │
//! │  0-9 ──────────────► input_digit() ────────► active operand += digit    │
//! │                                                                         │
//! │  + - × ÷ ──────────► choose_operator() ────► (compute if both set)      │
//! │                                              pending_operator = op      │
//! │                                                                         │
//! │  = ────────────────► compute_result() ─────► first = last_result = r    │
//! │                                              second = "", op = None     │
//! │                                                                         │
//! │  DEL ──────────────► delete_last() ────────► active operand.pop()       │
//! │                                                                         │
//! │  CLEAR ────────────► clear() ──────────────► everything unset           │
//! │                                                                         │
//! │  "Active operand" = second if an operator is pending, else first.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use calc_core::{CalculatorState, Digit, Operator};
//!
//! let mut calc = CalculatorState::new();
//! calc.input_digit(Digit::new('5')?);
//! calc.choose_operator(Operator::Add);
//! calc.input_digit(Digit::new('3')?);
//! calc.compute_result();
//!
//! assert_eq!(calc.display(), "8");
//! # Ok::<(), calc_core::CoreError>(())
//! ```

use crate::error::CoreResult;
use crate::number::{format_result, parse_operand};
use crate::types::{CalculatorSnapshot, Digit, Key, Operator, Phase};

/// What the display shows when nothing has been typed or computed.
pub const EMPTY_DISPLAY: &str = "0";

/// All calculator state, held as one record.
///
/// ## Invariants
/// - Digits go to `second_operand` iff `pending_operator` is set
/// - A computation needs both operands non-empty and an operator pending
/// - After a computation the result becomes the first operand, so the next
///   operator chains onto it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalculatorState {
    first_operand: String,
    second_operand: String,
    pending_operator: Option<Operator>,
    last_result: Option<String>,
}

impl CalculatorState {
    /// Creates a calculator with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Appends a digit (or decimal point) to the active operand.
    ///
    /// Well-formedness is not checked: `"1.2.3"` can be typed.
    pub fn input_digit(&mut self, digit: Digit) {
        self.active_operand_mut().push(digit.as_char());
    }

    /// Resets every field to its unset value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Removes the last character of the active operand.
    ///
    /// No-op when the active operand is already empty.
    pub fn delete_last(&mut self) {
        self.active_operand_mut().pop();
    }

    /// Selects the pending operator.
    ///
    /// When both operands are already filled the pending computation is
    /// committed first, so `2 + 3 ×` leaves `5` as the first operand.
    pub fn choose_operator(&mut self, op: Operator) {
        if self.has_both_operands() {
            self.compute_result();
        }
        self.pending_operator = Some(op);
    }

    /// Evaluates `first pending_operator second`.
    ///
    /// No-op unless both operands are non-empty and an operator is pending.
    /// The result is stored as both `last_result` and the new first operand;
    /// the second operand and the operator are reset.
    ///
    /// Division by zero is not guarded: the display shows `inf`, `-inf` or
    /// `NaN`.
    pub fn compute_result(&mut self) {
        if !self.has_both_operands() {
            return;
        }
        let Some(op) = self.pending_operator else {
            return;
        };

        let lhs = parse_operand(&self.first_operand);
        let rhs = parse_operand(&self.second_operand);
        let result = format_result(op.apply(lhs, rhs));

        self.first_operand.clone_from(&result);
        self.last_result = Some(result);
        self.second_operand.clear();
        self.pending_operator = None;
    }

    /// Dispatches a single button press.
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(digit) => self.input_digit(digit),
            Key::Operator(op) => self.choose_operator(op),
            Key::Clear => self.clear(),
            Key::Delete => self.delete_last(),
            Key::Equals => self.compute_result(),
        }
    }

    /// Parses a button label and presses it.
    ///
    /// The state is left untouched when the label is unknown.
    pub fn press_label(&mut self, label: &str) -> CoreResult<Key> {
        let key = label.parse::<Key>()?;
        self.press(key);
        Ok(key)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// The text shown to the user.
    ///
    /// First non-empty of: second operand, first operand, last result, `"0"`.
    pub fn display(&self) -> &str {
        [
            self.second_operand.as_str(),
            self.first_operand.as_str(),
            self.last_result.as_deref().unwrap_or_default(),
        ]
        .into_iter()
        .find(|text| !text.is_empty())
        .unwrap_or(EMPTY_DISPLAY)
    }

    pub fn phase(&self) -> Phase {
        match self.pending_operator {
            None => Phase::EnteringFirst,
            Some(_) if self.second_operand.is_empty() => Phase::OperatorChosen,
            Some(_) => Phase::EnteringSecond,
        }
    }

    pub fn first_operand(&self) -> &str {
        &self.first_operand
    }

    pub fn second_operand(&self) -> &str {
        &self.second_operand
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn last_result(&self) -> Option<&str> {
        self.last_result.as_deref()
    }

    /// Copies the state into the serializable view used by frontends.
    pub fn snapshot(&self) -> CalculatorSnapshot {
        CalculatorSnapshot {
            display: self.display().to_string(),
            first_operand: self.first_operand.clone(),
            second_operand: self.second_operand.clone(),
            pending_operator: self.pending_operator,
            last_result: self.last_result.clone(),
            phase: self.phase(),
        }
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn active_operand_mut(&mut self) -> &mut String {
        if self.pending_operator.is_some() {
            &mut self.second_operand
        } else {
            &mut self.first_operand
        }
    }

    fn has_both_operands(&self) -> bool {
        !self.first_operand.is_empty() && !self.second_operand.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::keypad::KEYPAD;

    fn any_operator() -> impl Strategy<Value = Operator> {
        prop::sample::select(Operator::ALL.to_vec())
    }

    fn any_key() -> impl Strategy<Value = Key> {
        let keys: Vec<Key> = KEYPAD.iter().flat_map(|row| row.iter().copied()).collect();
        prop::sample::select(keys)
    }

    fn type_digits(calc: &mut CalculatorState, digits: &str) {
        for ch in digits.chars() {
            calc.input_digit(Digit::new(ch).unwrap());
        }
    }

    /// Reference arithmetic, kept apart from `Operator::apply`.
    fn eval(op: Operator, a: f64, b: f64) -> f64 {
        match op.symbol() {
            '+' => a + b,
            '-' => a - b,
            '*' => a * b,
            _ => a / b,
        }
    }

    proptest! {
        #[test]
        fn prop_binary_operation_matches_f64(
            a in "[0-9]{1,6}",
            b in "[0-9]{1,6}",
            op in any_operator(),
        ) {
            let mut calc = CalculatorState::new();
            type_digits(&mut calc, &a);
            calc.choose_operator(op);
            type_digits(&mut calc, &b);
            calc.compute_result();

            let expected = eval(op, a.parse().unwrap(), b.parse().unwrap()).to_string();
            prop_assert_eq!(calc.first_operand(), expected.as_str());
            prop_assert_eq!(calc.second_operand(), "");
            prop_assert_eq!(calc.pending_operator(), None);
        }

        #[test]
        fn prop_clear_always_resets(keys in prop::collection::vec(any_key(), 0..40)) {
            let mut calc = CalculatorState::new();
            for key in keys {
                calc.press(key);
            }
            calc.clear();
            prop_assert_eq!(calc, CalculatorState::new());
        }

        #[test]
        fn prop_second_operand_needs_operator(keys in prop::collection::vec(any_key(), 0..40)) {
            let mut calc = CalculatorState::new();
            for key in keys {
                calc.press(key);
                if calc.pending_operator().is_none() {
                    prop_assert_eq!(calc.second_operand(), "");
                }
            }
        }

        #[test]
        fn prop_delete_on_empty_target_is_idempotent(
            keys in prop::collection::vec(any_key(), 0..20),
        ) {
            let mut calc = CalculatorState::new();
            for key in keys {
                calc.press(key);
            }
            // Drain the active operand, then one more delete must change nothing
            for _ in 0..256 {
                calc.delete_last();
            }
            let before = calc.clone();
            calc.delete_last();
            prop_assert_eq!(calc, before);
        }

        #[test]
        fn prop_result_chains_as_first_operand(
            a in "[1-9][0-9]{0,3}",
            b in "[1-9][0-9]{0,3}",
            c in "[1-9][0-9]{0,3}",
            first in any_operator(),
            second in any_operator(),
        ) {
            let mut calc = CalculatorState::new();
            type_digits(&mut calc, &a);
            calc.choose_operator(first);
            type_digits(&mut calc, &b);
            calc.compute_result();
            let intermediate = calc.first_operand().to_string();

            calc.choose_operator(second);
            type_digits(&mut calc, &c);
            calc.compute_result();

            let lhs = parse_operand(&intermediate);
            let expected = eval(second, lhs, c.parse().unwrap()).to_string();
            prop_assert_eq!(calc.display(), expected.as_str());
        }
    }
}
