//! # chatmock-client
//!
//! Session layer of the chat mockup generator: the caller-owned
//! [`Session`], the command functions a UI binds to, event notifications
//! and PNG export.

pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod state;

use tracing_subscriber::{fmt, EnvFilter};

pub use config::SessionConfig;
pub use error::{ClientError, Result};
pub use state::Session;

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the
/// default filter. Calling it again is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("chatmock_client_lib=debug,chatmock_store=info,chatmock_timeline=info,warn")
    });

    let installed = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Starting {} session layer", chatmock_shared::constants::APP_NAME);
    }
}
