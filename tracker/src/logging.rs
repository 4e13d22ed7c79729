//! Tracing subscriber setup for processes embedding the tracker.

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber. `RUST_LOG` takes precedence over
/// `default_filter`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left in place.
pub fn init_logging(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        init_logging("debug");
        assert!(!init_logging("info"));
        tracing::info!("logging initialised");
    }

    #[test]
    fn test_bad_filter_falls_back() {
        // Must not panic even with a nonsense directive
        init_logging("[[not a filter");
    }
}
