use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_SESSION_ID: &str = "default_user";

/// Opaque token grouping exchanges on the backend.
///
/// Fixed for the lifetime of the page, there is no rotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Blank input falls back to the default identifier
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::default()
        } else {
            Self(value)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self(DEFAULT_SESSION_ID.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_session_falls_back() {
        assert_eq!(SessionId::new("  ").as_str(), DEFAULT_SESSION_ID);
        assert_eq!(SessionId::new("kid-42").as_str(), "kid-42");
    }
}
