use std::time::Duration;

use stockx_core::{Result, StockXError};

pub const API_BASE_URL: &str = "https://stockx.com/api/";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:101.0) Gecko/20100101 Firefox/101.0";

/// Client settings. Everything has a working default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root that resource paths are joined against. Keep the trailing
    /// slash, otherwise the last path segment is replaced on join.
    pub base_url: String,
    pub user_agent: String,
    /// No timeout is applied when unset.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Reads overrides from `STOCKX_API_BASE`, `STOCKX_USER_AGENT` and
    /// `STOCKX_TIMEOUT_SECS`. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base_url) = lookup("STOCKX_API_BASE").filter(|v| !v.is_empty()) {
            config.base_url = base_url;
        }
        if let Some(user_agent) = lookup("STOCKX_USER_AGENT").filter(|v| !v.is_empty()) {
            config.user_agent = user_agent;
        }
        if let Some(secs) = lookup("STOCKX_TIMEOUT_SECS").filter(|v| !v.is_empty()) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                StockXError::Config(format!("STOCKX_TIMEOUT_SECS is not a number: {}", secs))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}
