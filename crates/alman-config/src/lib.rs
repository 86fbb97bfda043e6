use serde::{Deserialize, Serialize};

use self::http::HttpConfig;
use self::lookup::LookupConfig;

pub mod http;
pub mod lookup;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    pub lookup: LookupConfig,
}

impl Config {
    /// Build configuration from environment variables, falling back to defaults
    pub fn new() -> Self {
        Config {
            http: HttpConfig::new(),
            lookup: LookupConfig::new(),
        }
    }
}

/// Read a variable and parse it, ignoring unset or malformed values
pub(crate) fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
