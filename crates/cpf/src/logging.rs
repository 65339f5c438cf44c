//! Logging setup for the command-line tool.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber. `RUST_LOG` overrides the defaults.
pub fn init_logger(verbose: bool) {
    let default = if verbose { "cpf=debug,cpf_core=debug,info" } else { "cpf=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
