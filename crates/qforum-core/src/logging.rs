//! Logging facility
//!
//! Single initialization point for the tracing subscriber. Call `init`
//! once at application startup; repeated calls are ignored so tests can
//! initialize freely.

use tracing_subscriber::EnvFilter;

/// Verbosity profile selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Development,
    Production,
}

impl Profile {
    fn default_filter(self) -> &'static str {
        match self {
            Profile::Development => "debug",
            Profile::Production => "info",
        }
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` overrides the profile's default filter.
pub fn init(profile: Profile) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(profile.default_filter()));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
