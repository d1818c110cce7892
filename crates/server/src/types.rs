use animdna::EnhancedPrompt;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<bool>,
}

impl DebugParams {
    /// Returns `info` only when `?debug=true` was requested.
    pub fn gate(&self, info: impl FnOnce() -> Value) -> Option<Value> {
        self.debug.unwrap_or(false).then(info)
    }
}

#[derive(Serialize, Deserialize)]
pub struct ExtractResponse {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
}

#[derive(Serialize, Deserialize)]
pub struct PromptsResponse {
    pub count: usize,
    pub prompts: Vec<EnhancedPrompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
}
