use radix_canary_domain::config::LoggingConfig;
use tracing::warn;
use tracing_subscriber::EnvFilter;

const FALLBACK_LEVEL: &str = "info";

/// JSON lines by default; `pretty` switches to human-readable console output.
/// An unknown level falls back to `info` and an unparsable `PRETTY_LOG` falls
/// back to JSON; both are reported once logging is up.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let (filter, rejected) = match EnvFilter::try_new(&config.level) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_LEVEL), Some(e)),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.pretty {
        builder.pretty().try_init()
    } else {
        builder.json().with_current_span(true).try_init()
    };
    result.map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    if let Some(e) = rejected {
        warn!(
            level = %config.level,
            error = %e,
            "Invalid log level, falling back to {}",
            FALLBACK_LEVEL
        );
    }

    if let Some(value) = &config.rejected_pretty {
        warn!(
            pretty_log = %value,
            "Invalid PRETTY_LOG value, falling back to JSON output"
        );
    }

    Ok(())
}
