//! Tracing subscriber setup.

use quill_config::ObservabilityConfig;
use quill_core::{QuillError, QuillResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the filter: `RUST_LOG` wins, otherwise the configured level for
/// Quill crates and HTTP tracing.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},quill={level},tower_http={level},sqlx=warn",
            level = config.log_level
        ))
    })
}

/// Installs the global subscriber with the configured output format.
pub fn init_logging(config: &ObservabilityConfig) -> QuillResult<()> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let result = if config.is_json() {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| QuillError::internal(format!("Failed to initialize logging: {e}")))
}
