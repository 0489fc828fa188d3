use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_TIMEOUT_SECS, MAX_TIMEOUT_SECS, MIN_TIMEOUT_SECS,
};

use std::fmt;

use serde::Deserialize;

/// Connection settings for the SCIM endpoint.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ScimConfig {
    /// Base URL of the identity host, e.g. "https://api.github.com"
    pub url: String,
    /// Enterprise slug in the Users endpoint path
    pub enterprise: String,
    /// Bearer token with SCIM scope
    pub token: Option<String>,
    /// Per-request timeout
    pub timeout_secs: u64,
}

impl Default for ScimConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            enterprise: String::new(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

// Hand-written so the token never reaches a log line.
impl fmt::Debug for ScimConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScimConfig")
            .field("url", &self.url)
            .field("enterprise", &self.enterprise)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ScimConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ConfigError::scim(
                "scim.url is required (--url, SP_SCIM_URL or config.toml)",
            ));
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::scim(format!(
                "scim.url must start with http:// or https://, got {}",
                url
            )));
        }

        let enterprise = self.enterprise.trim();
        if enterprise.is_empty() {
            return Err(ConfigError::scim(
                "scim.enterprise is required (--enterprise, SP_SCIM_ENTERPRISE or config.toml)",
            ));
        }

        if !enterprise
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(ConfigError::scim(format!(
                "scim.enterprise may only contain A-Z, a-z, 0-9, '-', '_' and '.', got {}",
                enterprise
            )));
        }

        match self.token.as_deref() {
            Some(token) if !token.trim().is_empty() => {}
            _ => {
                return Err(ConfigError::scim(
                    "scim.token is required (--token, SP_SCIM_TOKEN or config.toml)",
                ));
            }
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::scim(format!(
                "scim.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Users endpoint under the configured enterprise
    pub fn users_endpoint(&self) -> String {
        format!(
            "{}/scim/v2/enterprises/{}/Users",
            self.url.trim().trim_end_matches('/'),
            self.enterprise.trim()
        )
    }
}
