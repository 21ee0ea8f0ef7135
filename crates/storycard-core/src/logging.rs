//! Tracing subscriber setup.
//!
//! ```ignore
//! storycard_core::logging::init_logging(Some("storycard_core=debug,info"))?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::{CardError, CardResult};

/// Filter used when neither an explicit filter nor `RUST_LOG` is set
pub const DEFAULT_FILTER: &str = "info";

/// Build the filter: explicit directive, then `RUST_LOG`, then [`DEFAULT_FILTER`]
pub fn env_filter(filter: Option<&str>) -> CardResult<EnvFilter> {
    match filter {
        Some(directives) => EnvFilter::try_new(directives)
            .map_err(|e| CardError::Config(format!("invalid log filter '{}': {}", directives, e))),
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global fmt subscriber.
///
/// A second call leaves the first subscriber in place.
pub fn init_logging(filter: Option<&str>) -> CardResult<()> {
    let filter = env_filter(filter)?;
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_filter() {
        assert!(env_filter(Some("storycard_core=debug")).is_ok());
    }

    #[test]
    fn test_bad_filter_is_config_error() {
        assert!(matches!(env_filter(Some("storycard_core=loud")), Err(CardError::Config(_))));
    }

    #[test]
    fn test_init_twice() {
        init_logging(Some("warn")).unwrap();
        init_logging(Some("warn")).unwrap();
    }
}
