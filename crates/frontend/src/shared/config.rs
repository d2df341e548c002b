//! Widget configuration embedded at build time.

use contracts::shared::widget_config::WidgetConfig;
use leptos::prelude::*;

/// Contents of `kidopedia.toml` next to this crate's `Cargo.toml`
const EMBEDDED_CONFIG: &str = include_str!("../../kidopedia.toml");

/// Parse the embedded configuration.
///
/// A broken document is not fatal: the widget falls back to built-in
/// defaults and logs why.
pub fn load_config() -> WidgetConfig {
    match WidgetConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => {
            log::debug!(
                "Loaded widget config: protocol={}, session={}",
                config.api.protocol.as_str(),
                config.chat.session_id
            );
            config
        }
        Err(e) => {
            log::warn!("Invalid kidopedia.toml, using defaults: {}", e);
            WidgetConfig::default()
        }
    }
}

/// Config provided by `Providers`, or freshly loaded when used outside of it
pub fn use_widget_config() -> WidgetConfig {
    use_context::<WidgetConfig>().unwrap_or_else(load_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_kido_chat::dto::Protocol;

    #[test]
    fn test_embedded_config_loads() {
        let config = WidgetConfig::from_toml_str(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.api.protocol, Protocol::Chat);
        assert_eq!(config.api.port, 8002);
        assert_eq!(config.api.base, None);
        assert_eq!(config, WidgetConfig::default());
    }
}
