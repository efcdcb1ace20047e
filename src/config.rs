use anyhow::{Context, Result};

/// Default base URL for the chat completions API
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default model used when CHAT_MODEL env var is not set
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
    pub bind_addr: String,
}

impl Config {
    /// Load configuration from a .env file and the environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // missing .env is fine

        let api_key = std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;

        let api_base =
            std::env::var("OPENAI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        let model = std::env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            api_key,
            api_base,
            model,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_api_key_and_fills_defaults() {
        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
            std::env::remove_var("OPENAI_API_BASE");
            std::env::remove_var("CHAT_MODEL");
            std::env::remove_var("BIND_ADDR");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));

        unsafe { std::env::set_var("OPENAI_API_KEY", "test-key") };
        let config = Config::from_env().unwrap();
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }
}
