//! Decides whether a question asks for a picture.

pub const DEFAULT_IMAGE_KEYWORDS: [&str; 7] = [
    "draw",
    "picture",
    "image",
    "illustrate",
    "show me",
    "paint",
    "sketch",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Text,
    Image,
}

impl RequestKind {
    pub fn is_image(&self) -> bool {
        matches!(self, RequestKind::Image)
    }

    /// Label of the Ask button while the request is in flight
    pub fn loading_label(&self) -> &'static str {
        match self {
            RequestKind::Text => "Thinking...",
            RequestKind::Image => "Drawing...",
        }
    }
}

/// Lowercased keyword allowlist matched as substrings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageKeywords(Vec<String>);

impl ImageKeywords {
    /// Blank entries are dropped
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        )
    }

    pub fn classify(&self, text: &str) -> RequestKind {
        let text = text.to_lowercase();
        if self.0.iter().any(|k| text.contains(k.as_str())) {
            RequestKind::Image
        } else {
            RequestKind::Text
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for ImageKeywords {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_KEYWORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_image_requests() {
        let keywords = ImageKeywords::default();
        for text in [
            "Draw a cat",
            "can you SHOW ME a volcano",
            "A picture of the moon please",
            "paint a rainbow",
            "Illustrate how bees fly",
        ] {
            assert_eq!(keywords.classify(text), RequestKind::Image, "{text}");
        }
    }

    #[test]
    fn test_classify_text_requests() {
        let keywords = ImageKeywords::default();
        for text in ["What is gravity?", "Why do cats purr?", "show the answer"] {
            assert_eq!(keywords.classify(text), RequestKind::Text, "{text}");
        }
    }

    #[test]
    fn test_custom_keywords_are_normalised() {
        let keywords = ImageKeywords::new(["  Doodle ", "", "   "]);
        assert_eq!(keywords.as_slice(), ["doodle".to_string()]);
        assert!(keywords.classify("doodle a dog").is_image());
        assert!(!keywords.classify("draw a dog").is_image());
    }

    #[test]
    fn test_loading_labels() {
        assert_eq!(RequestKind::Text.loading_label(), "Thinking...");
        assert_eq!(RequestKind::Image.loading_label(), "Drawing...");
    }
}
