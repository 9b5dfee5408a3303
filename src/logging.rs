//! Tracing setup for host services.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Settings, DEFAULT_LOG_FILTER};

/// Build the filter from the configured directive, falling back to the
/// default when the directive does not parse.
pub fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|e| {
        eprintln!(
            "Invalid log filter '{}' ({}), using '{}'",
            settings.log_filter, e, DEFAULT_LOG_FILTER
        );
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}

/// Install a global fmt subscriber. Returns false when one is already set.
pub fn init_tracing(settings: &Settings) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(settings))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_from_settings() {
        let settings = Settings {
            log_filter: "officio=debug".to_string(),
            ..Settings::default()
        };
        assert_eq!(
            env_filter(&settings).to_string(),
            EnvFilter::new("officio=debug").to_string()
        );
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        let settings = Settings {
            log_filter: "officio=notalevel[".to_string(),
            ..Settings::default()
        };
        assert!(EnvFilter::try_new(&settings.log_filter).is_err());
        assert_eq!(
            env_filter(&settings).to_string(),
            EnvFilter::new(DEFAULT_LOG_FILTER).to_string()
        );
    }

    #[test]
    fn test_init_tracing_twice() {
        let settings = Settings::default();
        init_tracing(&settings);
        assert!(!init_tracing(&settings));
    }
}
