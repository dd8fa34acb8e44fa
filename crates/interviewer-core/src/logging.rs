//! Structured logging setup
//!
//! Logs always go to stderr so that command output on stdout stays clean for
//! scripts and the `--format json` consumers.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that overrides the computed filter
pub const LOG_ENV_VAR: &str = "INTERVIEWER_LOG";

/// Helper macro for logging elapsed time at trace level.
///
/// Usage:
/// ```rust,ignore
/// let start = Instant::now();
/// // ... some work ...
/// trace_time!(start, "load_banks");
/// // Or with additional fields:
/// trace_time!(start, "resolve_plan", track = track.as_str());
/// ```
#[macro_export]
macro_rules! trace_time {
    ($start:expr, $name:expr) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $name);
    };
    ($start:expr, $name:expr $(, $field:ident = $value:expr)*) => {
        tracing::trace!(elapsed = ?$start.elapsed(), $($field = $value),*, $name);
    };
}

/// Initialize structured logging based on CLI arguments
pub fn init_tracing(
    verbose: bool,
    log_level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let level = match (verbose, log_level) {
        (_, Some(level)) => level,
        (true, None) => "debug",
        (false, None) => "warn",
    };

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| filter_for(level));

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

/// Build a filter for a bare level ("debug") or a full directive ("interviewer=trace").
fn filter_for(level: &str) -> EnvFilter {
    if level.contains('=') {
        EnvFilter::new(level)
    } else {
        EnvFilter::new(format!(
            "interviewer={level},interviewer_core={level}",
            level = level
        ))
    }
}
