use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor the config names one.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "credit_score=debug"
    } else {
        "warn"
    }
}

/// Filter used when `RUST_LOG` is unset: the configured one, else the verbosity default.
pub fn fallback_filter(configured: Option<&str>, verbose: bool) -> &str {
    configured.unwrap_or(default_filter(verbose))
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins over `configured`, which wins over the verbosity default.
pub fn init(configured: Option<&str>, verbose: bool) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let value = fallback_filter(configured, verbose);
            EnvFilter::try_new(value)
                .with_context(|| format!("invalid log level/filter '{}'", value))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!("telemetry error: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_parse() {
        assert!(EnvFilter::try_new(default_filter(true)).is_ok());
        assert!(EnvFilter::try_new(default_filter(false)).is_ok());
    }

    #[test]
    fn test_configured_level_wins_over_verbose() {
        assert_eq!(fallback_filter(Some("info"), true), "info");
        assert_eq!(fallback_filter(Some("error"), false), "error");
    }

    #[test]
    fn test_verbosity_default_without_configured_level() {
        assert_eq!(fallback_filter(None, true), "credit_score=debug");
        assert_eq!(fallback_filter(None, false), "warn");
    }
}
