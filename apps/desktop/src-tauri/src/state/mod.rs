//! # State Module
//!
//! Manages application state for the Tauri desktop app.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Tauri Runtime                              │   │
//! │  │  app.manage(session);                                           │   │
//! │  │  app.manage(config_state);                                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │               ┌──────────────┴──────────────┐                          │
//! │               ▼                             ▼                           │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐            │
//! │  │   CalculatorSession      │  │      ConfigState         │            │
//! │  │                          │  │                          │            │
//! │  │  Arc<Mutex<              │  │  app name / version      │            │
//! │  │    CalculatorState       │  │  keypad layout           │            │
//! │  │  >>                      │  │                          │            │
//! │  └──────────────────────────┘  └──────────────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CalculatorSession: Arc<Mutex<T>> for exclusive access               │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;

pub use calculator::CalculatorSession;
pub use config::ConfigState;
