use serde::{Deserialize, Serialize};

/// A single line of extracted text that survived candidate filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptCandidate {
    /// The trimmed line.
    pub text: String,
    /// Length of `text` in characters.
    pub length: usize,
    /// Number of whitespace-separated tokens in `text`.
    pub word_count: usize,
}

impl PromptCandidate {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            length: text.chars().count(),
            word_count: text.split_whitespace().count(),
            text,
        }
    }
}

/// The result of enhancing one candidate.
///
/// `enhanced` always starts with `original`; the enhancer only appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedPrompt {
    pub original: String,
    pub enhanced: String,
}
