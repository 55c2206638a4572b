//! Structured logging setup.
//!
//! Library code only emits `tracing` events; binaries and the browser entry
//! point call [`init_logging`] once with a writer suited to their platform.

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::ClientError;

impl LoggingConfig {
    /// Parse the configured directive string.
    pub fn env_filter(&self) -> Result<EnvFilter, ClientError> {
        EnvFilter::try_new(&self.filter)
            .map_err(|e| ClientError::Config(format!("logging.filter: {e}")))
    }
}

/// Install the global `tracing` subscriber.
///
/// Fails if the filter is invalid or a subscriber is already installed.
pub fn init_logging<W>(config: &LoggingConfig, writer: W) -> Result<(), ClientError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_ansi(config.ansi)
        .with_target(config.with_target)
        .with_writer(writer);

    let installed = if config.timestamps {
        builder.try_init()
    } else {
        builder.without_time().try_init()
    };

    installed.map_err(|e| ClientError::Config(format!("logging already initialised: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(LoggingConfig::default().env_filter().is_ok());
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = LoggingConfig {
            filter: "verdant_client=chatty".to_string(),
            ..Default::default()
        };
        let err = init_logging(&config, std::io::sink).unwrap_err();
        assert!(err.to_string().contains("logging.filter"));
    }
}
