//! Tracing/logging initialization.
//!
//! Logs always go to stderr; stdout belongs to command output.

use tracing_subscriber::EnvFilter;

use crate::LogConfig;

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // JSON logs + timestamps when asked for, configurable via RUST_LOG.
    let _ = if config.json {
        builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init()
    } else {
        builder.try_init()
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_a_no_op() {
        let config = LogConfig::default();
        init(&config);
        init(&LogConfig {
            json: true,
            ..config
        });
        ::tracing::debug!("still alive after double init");
    }
}
