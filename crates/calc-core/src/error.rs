//! # Error Types
//!
//! Domain-specific error types for calc-core.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Boundary                                  │
//! │                                                                         │
//! │  Presentation layer          calc-core                                  │
//! │  ──────────────────          ─────────                                  │
//! │                                                                         │
//! │  "7", "÷", "DEL" ──► Digit / Operator / Key parsing ──► CoreError      │
//! │                                  │                                      │
//! │                                  ▼ (typed values only)                  │
//! │                        CalculatorState operations                       │
//! │                        (total, never fail)                              │
//! │                                                                         │
//! │  Tauri API errors (in app)                                              │
//! │  └── ApiError         - What frontend sees (serialized)                 │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → Frontend                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Arithmetic anomalies (division by zero, malformed decimals) are NOT errors:
//! they flow through as `inf` / `NaN` strings on the display.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Input errors raised while turning raw presentation-layer input into typed
/// calculator values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Character is neither `0`-`9` nor the decimal point.
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),

    /// Symbol is not one of the four binary operators.
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Button label does not map to any calculator key.
    ///
    /// ## When This Occurs
    /// - Frontend and backend keypad layouts drift apart
    /// - A label is sent with stray whitespace or wrong casing
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
