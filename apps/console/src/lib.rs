//! # Bistro Console Library
//!
//! Wires the pure `bistro-core` pipeline to a terminal.
//!
//! ## Module Organization
//! ```text
//! bistro_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── AppConfig from BISTRO_* variables
//! ├── kitchen.rs      ◄─── Chef / Waiter observers + KitchenBoard
//! ├── payment.rs      ◄─── Cash / Mobile Wallet / Credit Card
//! ├── session.rs      ◄─── Prompt loop over stdin/stdout
//! └── error.rs        ◄─── AppError for the session
//! ```

pub mod config;
pub mod error;
pub mod kitchen;
pub mod payment;
pub mod session;

use std::io;

use bistro_core::RestaurantFacade;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use error::AppResult;
use kitchen::{build_kitchen, KitchenBoard};
use session::Session;

/// Runs the console application until the customer exits.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ─── stderr, RUST_LOG or "warn"                   │
/// │  2. Load AppConfig ─────── BISTRO_* overrides on top of defaults        │
/// │  3. Build Kitchen ──────── register configured staff, in order          │
/// │  4. Run Session ────────── stdin / stdout until exit or end of input    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = AppConfig::from_env();
    info!(config = %config.snapshot()?, "Starting Bistro console");

    let board = KitchenBoard::new();
    let facade = RestaurantFacade::new(build_kitchen(&config.kitchen_staff, &board));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), facade, board, config);
    let orders = session.run()?;

    info!(orders, "Session finished");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=bistro=debug` - Show every choice and settlement
/// - Default: WARN, so prompts are not buried in log lines
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
