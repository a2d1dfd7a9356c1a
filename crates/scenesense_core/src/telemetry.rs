//! Tracing subscriber setup for binaries.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize console logging.
///
/// Respects `RUST_LOG`; otherwise logs at `info` (or `debug` when `verbose`)
/// with SceneSense crates at `debug`. Logs go to stderr so command output on
/// stdout stays machine-readable.
///
/// # Errors
///
/// Returns error if a global subscriber is already installed.
pub fn init_console_telemetry(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let fallback = if verbose {
        "debug"
    } else {
        "info,scenesense=debug"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
