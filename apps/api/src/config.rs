use std::time::Duration;

use anyhow::{anyhow, Context, Result};

use crate::llm_client;
use crate::scoring::fit_scoring::ScorerBackend;
use crate::search::serpapi;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    /// Optional: without it every search degrades to zero candidates.
    pub serpapi_key: Option<String>,
    pub serpapi_base_url: String,
    pub scorer_backend: ScorerBackend,
    pub search_cache_capacity: u64,
    pub search_cache_ttl: Duration,
    pub http_timeout: Duration,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_base_url: env_or("GEMINI_BASE_URL", llm_client::DEFAULT_BASE_URL),
            gemini_model: env_or("GEMINI_MODEL", llm_client::DEFAULT_MODEL),
            serpapi_key: optional_env("SERPAPI_KEY"),
            serpapi_base_url: env_or("SERPAPI_BASE_URL", serpapi::DEFAULT_BASE_URL),
            scorer_backend: env_or("SCORER_BACKEND", "heuristic")
                .parse()
                .map_err(|e: String| anyhow!("SCORER_BACKEND is invalid: {e}"))?,
            search_cache_capacity: env_or("SEARCH_CACHE_CAPACITY", "1000")
                .parse()
                .context("SEARCH_CACHE_CAPACITY must be a non-negative integer")?,
            search_cache_ttl: Duration::from_secs(
                env_or("SEARCH_CACHE_TTL_SECS", "3600")
                    .parse()
                    .context("SEARCH_CACHE_TTL_SECS must be a number of seconds")?,
            ),
            http_timeout: Duration::from_secs(
                env_or("LLM_TIMEOUT_SECS", "120")
                    .parse()
                    .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            ),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    optional_env(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Unset and blank values are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}
