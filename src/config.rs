use crate::client::http::DEFAULT_BASE_URL;
use crate::{Error, Result};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Read settings from the environment, loading `.env` first when present.
    ///
    /// `BOT_API_ENV_FILE` names an alternative env file, which then must exist.
    pub fn from_env() -> Result<Self> {
        match std::env::var("BOT_API_ENV_FILE") {
            Ok(path) => {
                dotenvy::from_path(&path)?;
            }
            Err(_) => {
                dotenvy::dotenv().ok();
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup("BOT_API_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| Error::Config("BOT_API_TOKEN not set".to_string()))?;

        let timeout = match lookup("BOT_API_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                Error::Config(format!("BOT_API_TIMEOUT_SECS is not a number ({}): {}", raw, e))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            token,
            base_url: lookup("BOT_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout),
        })
    }
}
