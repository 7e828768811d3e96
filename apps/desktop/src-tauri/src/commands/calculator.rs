//! # Calculator Commands
//!
//! Tauri commands that forward button presses into the calculator.
//!
//! ## Calculator Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Input Cycle                                          │
//! │                                                                         │
//! │  ┌───────────────┐  choose_operator  ┌───────────────┐  input_digit    │
//! │  │ EnteringFirst │──────────────────►│OperatorChosen │───────────┐     │
//! │  └───────────────┘                   └───────────────┘           ▼     │
//! │          ▲                                            ┌───────────────┐│
//! │          │            compute_result                  │EnteringSecond ││
//! │          └────────────────────────────────────────────┴───────────────┘│
//! │                                                                         │
//! │  clear_calculator ─────────────────► back to EnteringFirst, all unset  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command returns the full [`CalculatorSnapshot`] so the frontend can
//! re-render without a second round trip.

use calc_core::{CalculatorSnapshot, CalculatorState, Digit, Operator};
use tauri::State;
use tracing::debug;

use crate::error::ApiError;
use crate::state::CalculatorSession;

/// Gets the current calculator state.
///
/// ## When Used
/// - Window load (display shows `"0"` on a fresh session)
#[tauri::command]
pub fn get_calculator(session: State<'_, CalculatorSession>) -> CalculatorSnapshot {
    debug!("get_calculator command");
    session.snapshot()
}

/// Handles any keypad button by its label.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  User taps "÷"                                                          │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  invoke('press_key', { label: '÷' })                                    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  1. Parse label → Key::Operator(Divide)                        │    │
/// │  │  2. Both operands set? commit pending computation              │    │
/// │  │  3. Set pending operator                                       │    │
/// │  │  4. Return snapshot                                            │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  Display re-renders from snapshot.display                               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Errors
/// `VALIDATION_ERROR` for a label that is not on the keypad; state unchanged.
#[tauri::command]
pub fn press_key(
    session: State<'_, CalculatorSession>,
    label: String,
) -> Result<CalculatorSnapshot, ApiError> {
    debug!(label = %label, "press_key command");
    Ok(session.press_label(&label)?)
}

/// Appends a digit (or decimal point) to the active operand.
#[tauri::command]
pub fn input_digit(
    session: State<'_, CalculatorSession>,
    digit: char,
) -> Result<CalculatorSnapshot, ApiError> {
    debug!(digit = %digit, "input_digit command");
    let digit = Digit::new(digit)?;
    Ok(session.apply(|calc| calc.input_digit(digit)))
}

/// Chooses the pending operator, committing any pending computation first.
///
/// ## Arguments
/// * `operator` - `"+"`, `"-"`, `"*"`/`"×"` or `"/"`/`"÷"`
#[tauri::command]
pub fn choose_operator(
    session: State<'_, CalculatorSession>,
    operator: String,
) -> Result<CalculatorSnapshot, ApiError> {
    debug!(operator = %operator, "choose_operator command");
    let op = operator.parse::<Operator>()?;
    Ok(session.apply(|calc| calc.choose_operator(op)))
}

/// Evaluates the pending operation (the `=` button).
///
/// No-op unless both operands are filled.
#[tauri::command]
pub fn compute_result(session: State<'_, CalculatorSession>) -> CalculatorSnapshot {
    debug!("compute_result command");
    session.apply(CalculatorState::compute_result)
}

/// Resets the calculator (the `CLEAR` button).
#[tauri::command]
pub fn clear_calculator(session: State<'_, CalculatorSession>) -> CalculatorSnapshot {
    debug!("clear_calculator command");
    session.apply(CalculatorState::clear)
}

/// Removes the last character of the active operand (the `DEL` button).
#[tauri::command]
pub fn delete_last(session: State<'_, CalculatorSession>) -> CalculatorSnapshot {
    debug!("delete_last command");
    session.apply(CalculatorState::delete_last)
}
