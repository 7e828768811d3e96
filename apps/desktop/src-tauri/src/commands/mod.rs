//! # Tauri Commands Module
//!
//! All commands exposed to the web frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs         ◄─── You are here (exports)
//! ├── calculator.rs  ◄─── Button presses and state reads
//! └── config.rs      ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  Frontend                                                               │
//! │  ────────                                                               │
//! │  const { invoke } = window.__TAURI__.core;                              │
//! │                                                                         │
//! │  const snapshot = await invoke('press_key', { label: '7' });            │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn press_key(                                                          │
//! │      session: State<'_, CalculatorSession>,  ◄── Injected by Tauri     │
//! │      label: String,                          ◄── From invoke params    │
//! │  ) -> Result<CalculatorSnapshot, ApiError>                              │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { display: "7", firstOperand: "7", ... }            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod calculator;
pub mod config;
