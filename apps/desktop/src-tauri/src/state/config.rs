//! # Configuration State
//!
//! Static application information handed to the frontend at startup.
//!
//! ## Configuration Sources
//! 1. `tauri.conf.json` (window title, size, frontend location)
//! 2. `RUST_LOG` (log filtering, see `init_tracing` in lib.rs)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use calc_core::{keypad_rows, KeypadButton, EMPTY_DISPLAY};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Name shown in the about line of the frontend.
    pub app_name: String,

    /// Crate version at build time.
    pub app_version: String,

    /// Display text before any input
    pub empty_display: String,

    /// Button grid, top row first.
    pub keypad: Vec<Vec<KeypadButton>>,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            app_name: "Calc".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            empty_display: EMPTY_DISPLAY.to_string(),
            keypad: keypad_rows(),
        }
    }
}
