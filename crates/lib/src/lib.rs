//! # animdna: 80s Animation Prompt DNA
//!
//! This crate holds the text-processing core of the prompt generator. It turns
//! lines of extracted document text into prompt candidates and rewrites each
//! candidate by appending stylistic descriptors from a fixed vocabulary of
//! 1980s animation keywords.
//!
//! The crate is deliberately free of I/O. Byte-level text extraction lives in
//! `animdna-pdf`, and the HTTP surface lives in `animdna-server`.

pub mod candidates;
pub mod choice;
pub mod enhancer;
pub mod errors;
pub mod export;
pub mod types;
pub mod vocabulary;

pub use candidates::{extract_candidates, filter_candidates};
pub use choice::{ChoiceSource, RngChoices, ThreadChoices};
pub use enhancer::{EnhancerSettings, PromptEnhancer, SelectionMode};
pub use errors::EnhanceError;
pub use export::{render_export, EXPORT_FILE_NAME};
pub use types::{EnhancedPrompt, PromptCandidate};
