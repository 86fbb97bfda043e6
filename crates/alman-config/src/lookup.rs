use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_parse;

/// Which online dictionary answers lookups
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Duden,
    #[default]
    Dwds,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Source::Duden => write!(f, "duden"),
            Source::Dwds => write!(f, "dwds"),
        }
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "duden" => Ok(Source::Duden),
            "dwds" => Ok(Source::Dwds),
            other => Err(format!("unknown dictionary source: {other}")),
        }
    }
}

fn default_timeout_seconds() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Upper bound for a whole lookup, including both Duden strategies
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub source: Source,
}

impl LookupConfig {
    pub fn new() -> Self {
        let timeout_seconds =
            env_parse("LOOKUP_TIMEOUT_SECONDS").unwrap_or_else(default_timeout_seconds);

        let source = env::var("DICTIONARY_SOURCE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Self {
            timeout_seconds,
            source,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            source: Source::default(),
        }
    }
}
