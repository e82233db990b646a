//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter,
    filter::ParseError,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::LoggingConfig;

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directives are invalid.
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` wins over the configured filter when set and valid.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the configured filter is invalid or a
/// subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    install(config, env_directives.as_deref())
}

fn install(config: &LoggingConfig, env_directives: Option<&str>) -> Result<(), TelemetryError> {
    let filter = resolve_filter(config, env_directives)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;
    Ok(())
}

fn resolve_filter(
    config: &LoggingConfig,
    env_directives: Option<&str>,
) -> Result<EnvFilter, ParseError> {
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .map_or_else(|| EnvFilter::try_new(config.filter.as_str()), Ok)
}
