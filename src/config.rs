use std::{env, time::Duration};

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_USER_ID: &str = "user123";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub user_id: String,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset, blank or
    /// unparsable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        Self {
            port: value("PORT")
                .and_then(|raw| raw.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            api_url: value("STUDY_API_URL")
                .map(|raw| raw.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            user_id: value("STUDY_USER_ID").unwrap_or(defaults.user_id),
            request_timeout: value("STUDY_API_TIMEOUT_SECS")
                .and_then(|raw| raw.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
        }
    }
}
