//! # Calculator Session State
//!
//! Holds the one calculator record for the lifetime of the window.
//!
//! ## Thread Safety
//! The calculator is wrapped in `Arc<Mutex<T>>` because:
//! 1. Tauri commands can run on different worker threads
//! 2. One button press must be one atomic transition
//! 3. The frontend re-reads the state right after every press
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Operations                                   │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           State Change          │
//! │  ───────────────          ─────────────           ────────────          │
//! │                                                                         │
//! │  Tap any button ─────────► press_key() ─────────► calc.press(key)      │
//! │                                                                         │
//! │  Tap 0-9 ────────────────► input_digit() ───────► active operand += d  │
//! │                                                                         │
//! │  Tap + - × ÷ ────────────► choose_operator() ───► pending = op         │
//! │                                                                         │
//! │  Tap = ──────────────────► compute_result() ────► first = result       │
//! │                                                                         │
//! │  Window load ────────────► get_calculator() ────► (read only)          │
//! │                                                                         │
//! │  NOTE: Every command returns a fresh snapshot taken under the lock.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use calc_core::{CalculatorSnapshot, CalculatorState, CoreResult};

/// Tauri-managed calculator state.
///
/// ## Poisoning
/// Every `CalculatorState` transition leaves the record consistent, so a
/// poisoned lock is recovered instead of propagated.
#[derive(Debug, Default)]
pub struct CalculatorSession {
    calculator: Arc<Mutex<CalculatorState>>,
}

impl CalculatorSession {
    /// Creates a session with a fresh calculator (window mount).
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the calculator.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let display = session.with_calculator(|calc| calc.display().to_string());
    /// ```
    pub fn with_calculator<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CalculatorState) -> R,
    {
        f(&*self.lock())
    }

    /// Executes a function with write access to the calculator.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// session.with_calculator_mut(|calc| calc.compute_result());
    /// ```
    pub fn with_calculator_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CalculatorState) -> R,
    {
        f(&mut *self.lock())
    }

    /// Applies a transition and returns the resulting snapshot atomically.
    pub fn apply<F>(&self, f: F) -> CalculatorSnapshot
    where
        F: FnOnce(&mut CalculatorState),
    {
        self.with_calculator_mut(|calc| {
            f(calc);
            calc.snapshot()
        })
    }

    /// Parses a button label and presses it.
    pub fn press_label(&self, label: &str) -> CoreResult<CalculatorSnapshot> {
        self.with_calculator_mut(|calc| {
            calc.press_label(label)?;
            Ok(calc.snapshot())
        })
    }

    pub fn snapshot(&self) -> CalculatorSnapshot {
        self.with_calculator(CalculatorState::snapshot)
    }

    fn lock(&self) -> MutexGuard<'_, CalculatorState> {
        self.calculator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calc_core::{Digit, Operator, Phase};

    fn press_all(session: &CalculatorSession, labels: &[&str]) -> CalculatorSnapshot {
        let mut snapshot = session.snapshot();
        for label in labels {
            snapshot = session.press_label(label).unwrap();
        }
        snapshot
    }

    #[test]
    fn test_new_session_displays_zero() {
        let session = CalculatorSession::new();
        let snapshot = session.snapshot();
        assert_eq!(snapshot.display, "0");
        assert_eq!(snapshot.phase, Phase::EnteringFirst);
    }

    #[test]
    fn test_press_sequence() {
        let session = CalculatorSession::new();
        let snapshot = press_all(&session, &["5", "+", "3", "="]);
        assert_eq!(snapshot.display, "8");
        assert_eq!(snapshot.last_result.as_deref(), Some("8"));
    }

    #[test]
    fn test_divide_by_zero() {
        let session = CalculatorSession::new();
        let snapshot = press_all(&session, &["7", "÷", "0", "="]);
        assert_eq!(snapshot.display, "inf");
    }

    #[test]
    fn test_delete_back_to_zero() {
        let session = CalculatorSession::new();
        let snapshot = press_all(&session, &["9", "DEL", "DEL"]);
        assert_eq!(snapshot.display, "0");
    }

    #[test]
    fn test_unknown_label_keeps_state() {
        let session = CalculatorSession::new();
        press_all(&session, &["4", "×"]);
        let before = session.snapshot();

        assert!(session.press_label("%").is_err());
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_apply_returns_snapshot_after_transition() {
        let session = CalculatorSession::new();
        session.apply(|calc| calc.input_digit(Digit::POINT));
        let snapshot = session.apply(|calc| calc.choose_operator(Operator::Add));

        assert_eq!(snapshot.first_operand, ".");
        assert_eq!(snapshot.pending_operator, Some(Operator::Add));
        assert_eq!(snapshot.phase, Phase::OperatorChosen);
    }

    #[test]
    fn test_clear_via_session() {
        let session = CalculatorSession::new();
        press_all(&session, &["1", "+", "2"]);
        let snapshot = session.apply(CalculatorState::clear);
        assert_eq!(snapshot, CalculatorState::new().snapshot());
    }

    #[test]
    fn test_session_shared_across_threads() {
        let session = Arc::new(CalculatorSession::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let session = Arc::clone(&session);
                std::thread::spawn(move || {
                    session.apply(|calc| calc.input_digit(Digit::new('1').unwrap()));
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(session.snapshot().display, "1111");
    }
}
