//! # calc-core: Pure Calculator Logic
//!
//! This crate is the **heart** of the calculator. It holds the one mutable
//! state record and every state transition, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Calc Architecture                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Frontend (HTML/JS in the WebView)                │   │
//! │  │          Display ◄── snapshot         Keypad ──► key label      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    press_key, input_digit, choose_operator, compute_result ...  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ calc-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ calculator │  │   types   │  │  number   │  │  keypad   │  │   │
//! │  │   │ Calculator │  │  Digit    │  │  parse /  │  │  button   │  │   │
//! │  │   │   State    │  │  Operator │  │  format   │  │  grid     │  │   │
//! │  │   └────────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RENDERING • DETERMINISTIC TRANSITIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`calculator`] - `CalculatorState` and its transitions
//! - [`types`] - `Digit`, `Operator`, `Key`, `Phase`, `CalculatorSnapshot`
//! - [`number`] - Operand parsing and result formatting
//! - [`keypad`] - Button grid layout
//! - [`error`] - Input error types
//!
//! ## Example Usage
//!
//! ```rust
//! use calc_core::CalculatorState;
//!
//! let mut calc = CalculatorState::new();
//! for label in ["7", "÷", "0", "="] {
//!     calc.press_label(label)?;
//! }
//!
//! // Division by zero is displayed, not rejected
//! assert_eq!(calc.display(), "inf");
//! # Ok::<(), calc_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod calculator;
pub mod error;
pub mod keypad;
pub mod number;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::{CalculatorState, EMPTY_DISPLAY};
pub use error::{CoreError, CoreResult};
pub use keypad::{keypad_rows, KeypadButton, KEYPAD};
pub use types::*;
