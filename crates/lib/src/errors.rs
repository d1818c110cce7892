use thiserror::Error;

/// Errors raised while configuring or running the prompt enhancer.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EnhanceError {
    #[error("Prompt text is empty")]
    EmptyPrompt,
    #[error("Invalid enhancer settings: {0}")]
    InvalidSettings(String),
}
