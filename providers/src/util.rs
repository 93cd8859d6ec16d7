//! Shared utilities for generation services.

/// User-Agent string for HTTP requests.
pub const USER_AGENT: &str = concat!("lexigrid/", env!("CARGO_PKG_VERSION"));

/// Create a configured reqwest client with standard headers.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_default()
}

/// Look up the first non-empty environment variable among `names`.
pub fn env_var_any(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.trim().is_empty())
}
