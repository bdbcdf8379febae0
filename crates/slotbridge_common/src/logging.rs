//! Logging utilities for the Slotbridge service.
//!
//! Every crate logs through `tracing`; the binary calls [`init`] once at
//! startup. `RUST_LOG` overrides the default filter.

use tracing::{info, Level};
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

/// Crate targets that get the default level when `RUST_LOG` is unset.
const CRATE_TARGETS: [&str; 4] = [
    "slotbridge_backend",
    "slotbridge_common",
    "slotbridge_config",
    "slotbridge_slots",
];

/// Initialize the tracing subscriber at INFO.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// Uses `try_init`, so calling it again (e.g. from several tests) is harmless.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        CRATE_TARGETS
            .iter()
            .filter_map(|target| format!("{target}={level}").parse::<Directive>().ok())
            .fold(EnvFilter::new("warn"), |filter, directive| {
                filter.add_directive(directive)
            })
    });

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
