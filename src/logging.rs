//! Tracing subscriber setup

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{DomainSweepError, Result};

/// Set to a truthy value to default to debug-level logs
pub const DEBUG_VAR: &str = "DOMAIN_SWEEP_DEBUG";

/// Default filter directive when `RUST_LOG` is not set.
pub fn default_directive(debug: bool) -> &'static str {
    if debug {
        "domain_sweep=debug"
    } else {
        "domain_sweep=info"
    }
}

/// Whether the debug flag variable holds a truthy value.
pub fn debug_requested(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for the run summary.
pub fn init_logging() -> Result<()> {
    let debug_enabled = debug_requested(std::env::var(DEBUG_VAR).ok().as_deref());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug_enabled)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| DomainSweepError::internal(format!("Failed to initialize logging: {}", e)))?;

    tracing::debug!(debug_enabled, "Logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_requested() {
        assert!(debug_requested(Some("1")));
        assert!(debug_requested(Some(" TRUE ")));
        assert!(!debug_requested(Some("0")));
        assert!(!debug_requested(None));
    }

    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(false), "domain_sweep=info");
        assert_eq!(default_directive(true), "domain_sweep=debug");
    }

    #[test]
    fn test_init_logging_installs_once() {
        // Only test in this binary that touches the global subscriber
        assert!(init_logging().is_ok());
        assert!(init_logging().is_err());
    }
}
