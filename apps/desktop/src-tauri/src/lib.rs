//! # Calc Desktop Library
//!
//! Core library for the Calc desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! calc_desktop_lib/
//! ├── lib.rs            ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── calculator.rs ◄─── Calculator session (Arc<Mutex>)
//! │   └── config.rs     ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── calculator.rs ◄─── Button press commands
//! │   └── config.rs     ◄─── Config retrieval
//! └── error.rs          ◄─── API error type for commands
//! ```
//!
//! ## Presentation Layer Contract
//! The WebView owns no logic: it forwards one command per tap and renders
//! `snapshot.display` from whatever the command returns.

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CalculatorSession, ConfigState};

/// Default log directives when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info,calc=debug";

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, calc crates at DEBUG, override with RUST_LOG       │
/// │                                                                         │
/// │  2. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CalculatorSession: all fields unset (interface mount)             │
/// │     • ConfigState: app info + keypad layout                             │
/// │                                                                         │
/// │  3. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands                                             │
/// │     • Manage state                                                      │
/// │     • Launch window                                                     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// The calculator state is dropped with the app; nothing is persisted.
pub fn run() -> tauri::Result<()> {
    init_tracing();

    info!(version = env!("CARGO_PKG_VERSION"), "Starting Calc");

    tauri::Builder::default()
        .manage(CalculatorSession::new())
        .manage(ConfigState::default())
        .invoke_handler(tauri::generate_handler![
            // Calculator commands
            commands::calculator::get_calculator,
            commands::calculator::press_key,
            commands::calculator::input_digit,
            commands::calculator::choose_operator,
            commands::calculator::compute_result,
            commands::calculator::clear_calculator,
            commands::calculator::delete_last,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages from every crate
/// - `RUST_LOG=calc=trace` - Show trace for calc crates only
/// - Default: [`DEFAULT_LOG_FILTER`]
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
