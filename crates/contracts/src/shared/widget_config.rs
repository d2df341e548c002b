//! Widget configuration, parsed from TOML.
//!
//! Every field has a default, so a partial document (or an empty one) is
//! valid.

use crate::domain::a001_kido_chat::dto::Protocol;
use crate::domain::a001_kido_chat::intent::{ImageKeywords, DEFAULT_IMAGE_KEYWORDS};
use crate::domain::a001_kido_chat::session::{SessionId, DEFAULT_SESSION_ID};
use serde::Deserialize;

/// Default configuration, kept in sync with `WidgetConfig::default()`
pub const DEFAULT_CONFIG: &str = r#"
[api]
port = 8002
protocol = "chat"

[chat]
session_id = "default_user"
image_keywords = ["draw", "picture", "image", "illustrate", "show me", "paint", "sketch"]
"#;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct WidgetConfig {
    pub api: ApiConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute base URL. When unset it is derived from the page location.
    pub base: Option<String>,
    pub port: u16,
    pub protocol: Protocol,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChatConfig {
    pub session_id: String,
    pub image_keywords: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base: None,
            port: 8002,
            protocol: Protocol::Chat,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            session_id: DEFAULT_SESSION_ID.to_string(),
            image_keywords: DEFAULT_IMAGE_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl WidgetConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: WidgetConfig = toml::from_str(contents)?;
        Ok(config)
    }

    pub fn session_id(&self) -> SessionId {
        SessionId::new(self.chat.session_id.clone())
    }

    pub fn image_keywords(&self) -> ImageKeywords {
        ImageKeywords::new(&self.chat.image_keywords)
    }

    /// Base URL for API calls.
    ///
    /// `scheme` is the page protocol including the colon (`"http:"`), as
    /// `window.location.protocol` reports it.
    pub fn api_base(&self, scheme: &str, hostname: &str) -> String {
        match self.api.base.as_deref().map(str::trim) {
            Some(base) if !base.is_empty() => base.trim_end_matches('/').to_string(),
            _ => format!("{}//{}:{}", scheme, hostname, self.api.port),
        }
    }
}
