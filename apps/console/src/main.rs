//! # Bistro Console Entry Point
//!
//! ```text
//! main.rs ────► bistro_console::run()
//!                  │
//!                  ├── Ok  ──► exit 0
//!                  └── Err ──► log + message on stderr, exit 1
//! ```

use tracing::error;

fn main() {
    // The actual setup is in lib.rs for better testability
    if let Err(err) = bistro_console::run() {
        error!(code = err.code(), %err, "Session aborted");
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
