use super::session::SessionId;
use serde::{Deserialize, Serialize};

pub const CHAT_PATH: &str = "/api/chat";
pub const RESET_PATH: &str = "/api/reset";
pub const LEGACY_ASK_PATH: &str = "/ask";

/// Which backend contract the widget talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    /// `POST /api/chat` with session and image hints
    #[default]
    Chat,
    /// `POST /ask` with only the question text
    LegacyAsk,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Chat => "chat",
            Protocol::LegacyAsk => "legacy_ask",
        }
    }
}

/// Body of `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub session_id: SessionId,
    pub is_image_request: bool,
    /// Always serialized, as `null` when no image has been shown yet
    pub last_image_url: Option<String>,
}

/// Body of `POST /ask`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyAskRequest {
    pub question: String,
}

/// Body of `POST /api/reset`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResetRequest {
    pub session_id: SessionId,
}

/// Outbound body of an ask, tagged by the protocol that produced it
#[derive(Debug, Clone, PartialEq)]
pub enum AskBody {
    Chat(ChatRequest),
    Legacy(LegacyAskRequest),
}

impl AskBody {
    pub fn path(&self) -> &'static str {
        match self {
            AskBody::Chat(_) => CHAT_PATH,
            AskBody::Legacy(_) => LEGACY_ASK_PATH,
        }
    }
}

/// Response of both `/api/chat` (`reply`) and `/ask` (`answer`).
///
/// Every field is optional: a missing or `null` field means "nothing to
/// show", never an error. Extra fields such as `conversation` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl ChatReply {
    /// Answer text, preferring `reply` over the legacy `answer` field
    pub fn text(&self) -> Option<&str> {
        non_empty(&self.reply).or_else(|| non_empty(&self.answer))
    }

    pub fn image(&self) -> Option<&str> {
        non_empty(&self.image_url)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
