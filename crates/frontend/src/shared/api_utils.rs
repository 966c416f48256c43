//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// Uses the configured base URL when present, otherwise the current window
/// location with port 8000.
///
/// # Returns
/// - API base URL like "http://localhost:8000" or "https://api.playpro.id"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = &config().api_base_url {
        return base.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path relative to the base
///
/// # Example
/// ```rust,ignore
/// let url = api_url("admin/branches/3");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_normalizes_slashes() {
        assert_eq!(
            join_url("http://localhost:8000/", "/admin/branches"),
            "http://localhost:8000/admin/branches"
        );
        assert_eq!(
            join_url("https://api.playpro.id", "api/login"),
            "https://api.playpro.id/api/login"
        );
    }
}
