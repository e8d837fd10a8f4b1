//! Tracing subscriber bootstrap.
//!
//! Logs go to stderr so that tables printed on stdout stay machine-readable.

use anyhow::Context;
use payroll_kernel::settings::{LogFormat, TelemetrySettings};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level.
pub fn init(settings: &TelemetrySettings) -> anyhow::Result<()> {
    let env_filter = env_filter(settings)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    match settings.log_format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init(),
    }
    .context("failed to install tracing subscriber")?;

    tracing::debug!(
        target: "payroll-telemetry",
        format = ?settings.log_format,
        "telemetry initialized"
    );
    Ok(())
}

fn env_filter(settings: &TelemetrySettings) -> anyhow::Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.log_level)
            .with_context(|| format!("invalid log level '{}'", settings.log_level)),
    }
}
