//! API client configuration.
//!
//! The backend base URL is baked in at build time from `BIBLO_API_BASE_URL`.
//! An unset or blank value falls back to the local development backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing `/`.
    pub base_url: String,
}

impl ApiConfig {
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("BIBLO_API_BASE_URL"))
    }

    /// Apply an optional override on top of [`DEFAULT_API_BASE_URL`].
    pub fn from_override(raw: Option<&str>) -> Self {
        let base_url = raw
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        Self { base_url }
    }

    /// Absolute URL for an API path such as `/api/auth/me`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_override(None)
    }
}
