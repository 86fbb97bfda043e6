use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_parse;

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/113.0.0.0 Safari/537.36";

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_accept_invalid_certs() -> bool {
    true
}

/// Process-wide HTTP client settings, built once and handed to the fetcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Dictionary sites are fetched without certificate verification
    #[serde(default = "default_accept_invalid_certs")]
    pub accept_invalid_certs: bool,
}

impl HttpConfig {
    pub fn new() -> Self {
        let timeout_seconds =
            env_parse("HTTP_TIMEOUT_SECONDS").unwrap_or_else(default_timeout_seconds);

        let user_agent = env::var("USER_AGENT").unwrap_or_else(|_| default_user_agent());

        let accept_invalid_certs =
            env_parse("ACCEPT_INVALID_CERTS").unwrap_or_else(default_accept_invalid_certs);

        Self {
            timeout_seconds,
            user_agent,
            accept_invalid_certs,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
            accept_invalid_certs: default_accept_invalid_certs(),
        }
    }
}
