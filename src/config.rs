use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Data provider
    pub data_base_url: String,

    // Language
    pub default_language: String,

    // Fetch behavior
    pub fetch_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Base URL the two dataset files are served under,
            // e.g. http://localhost:8000 for data/en.json and data/zh.json
            data_base_url: std::env::var("DATA_BASE_URL")
                .context("DATA_BASE_URL not set")?,

            // Language
            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),

            // Fetch behavior
            fetch_timeout_secs: std::env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }

    /// Relative path of a language's dataset under the base URL.
    pub fn dataset_path(lang_code: &str) -> String {
        format!("data/{}.json", lang_code)
    }

    /// Full URL of a language's dataset.
    pub fn dataset_url(&self, lang_code: &str) -> String {
        format!(
            "{}/{}",
            self.data_base_url.trim_end_matches('/'),
            Self::dataset_path(lang_code)
        )
    }
}
