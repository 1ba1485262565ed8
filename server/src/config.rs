//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use academy_client::config::AuthConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid boolean for {var}: {value}")]
    InvalidBool { var: &'static str, value: String },
    #[error("ACADEMY_AUTH_ANON_KEY is required when ACADEMY_AUTH_URL is set")]
    MissingAnonKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ACADEMY_AUTH_URL`: identity provider base URL; offline mode when absent
    /// - `ACADEMY_AUTH_ANON_KEY`: required when `ACADEMY_AUTH_URL` is set
    /// - `ACADEMY_OFFLINE`: force offline mode even when a URL is set
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let offline = match lookup("ACADEMY_OFFLINE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool { var: "ACADEMY_OFFLINE", value: raw })?,
            None => false,
        };

        let url = lookup("ACADEMY_AUTH_URL")
            .map(|u| u.trim().trim_end_matches('/').to_owned())
            .filter(|u| !u.is_empty());
        let auth = match url {
            Some(url) if !offline => {
                let anon_key = lookup("ACADEMY_AUTH_ANON_KEY")
                    .map(|k| k.trim().to_owned())
                    .filter(|k| !k.is_empty())
                    .ok_or(ConfigError::MissingAnonKey)?;
                AuthConfig::hosted(&url, &anon_key)
            }
            _ => AuthConfig::offline(),
        };

        Ok(Self { port, auth })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
