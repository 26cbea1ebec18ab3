use anyhow::{Context, Result};

use crate::generation::parser::SectionBound;

/// Stand-in used when `HF_TOKEN` is absent. Startup proceeds with it — the
/// remote API rejects the requests and the service degrades to fallback copy
/// instead of refusing to boot.
pub const HF_TOKEN_PLACEHOLDER: &str = "your_huggingface_token_here";

/// Application configuration loaded once from environment variables and
/// carried read-only in `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub hf_token: String,
    pub port: u16,
    pub rust_log: String,
    /// Ceiling applied to a batch's requested post count.
    pub max_posts: usize,
    /// How far a `**Caption:**` / `**Hashtags:**` section extends in model output.
    pub section_bound: SectionBound,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            hf_token: std::env::var("HF_TOKEN")
                .unwrap_or_else(|_| HF_TOKEN_PLACEHOLDER.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_posts: std::env::var("MAX_POSTS")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<usize>()
                .context("MAX_POSTS must be a non-negative integer")?,
            section_bound: match std::env::var("SECTION_BOUND").as_deref() {
                Ok("text") => SectionBound::Text,
                _ => SectionBound::Line,
            },
        })
    }
}
