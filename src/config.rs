use std::env;
use std::time::Duration;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    /// Bound on the Gemini call. Unset means unbounded, matching the
    /// provider's default behavior.
    pub gemini_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty());
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-pro".to_string());
        let gemini_timeout = match env::var("GEMINI_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .context("GEMINI_TIMEOUT_SECS must be a whole number of seconds")?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        Ok(Self {
            database_url,
            bind_addr,
            gemini_api_key,
            gemini_model,
            gemini_timeout,
        })
    }
}
