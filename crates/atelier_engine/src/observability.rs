//! Tracing initialization.

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing with env-filter and fmt output.
///
/// Respects `RUST_LOG` when set, defaulting to `info` level. Returns an
/// error when a global subscriber is already installed.
pub fn init_tracing() -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| format!("Failed to initialize tracing: {}", e))?;

    info!("Tracing initialized");
    Ok(())
}
