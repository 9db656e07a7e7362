//! HTTP utilities for FPL API communication

use crate::{Result, BASE_URL_ENV_VAR};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client,
};

/// Public FPL API root.
pub const FPL_BASE_URL: &str = "https://fantasy.premierleague.com/api";

const USER_AGENT: &str = concat!("fpl-stats/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every request.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Build the shared reqwest client.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(default_headers())
        .build()?;
    Ok(client)
}

/// Pick the API root: explicit value, then `FPL_API_BASE_URL`, then the public default.
///
/// Trailing slashes are stripped so paths can be appended with `/`.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    let raw = base_url
        .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| FPL_BASE_URL.to_string());
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_headers_accept_json() {
        let headers = default_headers();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_build_client() {
        assert!(build_client().is_ok());
    }

    #[test]
    fn test_resolve_base_url_explicit_strips_slashes() {
        let url = resolve_base_url(Some("http://localhost:8080/api//".to_string()));
        assert_eq!(url, "http://localhost:8080/api");
    }

    #[test]
    fn test_resolve_base_url_from_env_and_default() {
        std::env::set_var(BASE_URL_ENV_VAR, "http://mirror.test/api/");
        assert_eq!(resolve_base_url(None), "http://mirror.test/api");

        // Explicit value wins over the env var
        assert_eq!(
            resolve_base_url(Some("http://explicit.test".to_string())),
            "http://explicit.test"
        );

        std::env::remove_var(BASE_URL_ENV_VAR);
        assert_eq!(resolve_base_url(None), FPL_BASE_URL);
    }
}
