//! Command implementations for the Premier League results CLI

pub mod results;

use crate::{pulse::http::PULSE_BASE_URL, API_URL_ENV_VAR};

/// Resolve the API base URL from the flag, then the environment, then the default.
pub fn resolve_api_url(api_url: Option<String>) -> String {
    api_url
        .or_else(|| {
            std::env::var(API_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| PULSE_BASE_URL.to_string())
}
