//! API utilities for frontend-backend communication

use contracts::shared::widget_config::WidgetConfig;

/// Get the base URL for API requests
///
/// Uses `[api] base` from the config when set. Otherwise builds it from the
/// current window location and `[api] port`.
///
/// # Example
/// ```rust,ignore
/// let url = format!("{}/api/chat", api_base(&config));
/// ```
pub fn api_base(config: &WidgetConfig) -> String {
    let (protocol, hostname) = match web_sys::window() {
        Some(window) => {
            let location = window.location();
            (
                location.protocol().unwrap_or_else(|_| "http:".to_string()),
                location
                    .hostname()
                    .unwrap_or_else(|_| "127.0.0.1".to_string()),
            )
        }
        None => ("http:".to_string(), "127.0.0.1".to_string()),
    };
    config.api_base(&protocol, &hostname)
}

/// Build a full API URL from a base and a path starting with `/`
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}
