//! # animdna-pdf: Heuristic PDF Text Extraction
//!
//! This crate scrapes readable text out of raw PDF bytes and feeds it through
//! the `animdna` prompt pipeline. It does not parse the PDF object model: no
//! cross-reference tables, no stream filters, no font encodings. Instead it
//! tries three byte-level heuristics in order and keeps the first one that
//! produces text. Any non-empty input yields some text.

pub mod extract;
pub mod heuristics;
pub mod pipeline;

use animdna::EnhanceError;
use thiserror::Error;

pub use extract::{looks_like_pdf, Extraction, TextExtractor};
pub use heuristics::{FallbackHeuristic, Heuristic, ParenthesisHeuristic, StreamHeuristic};
pub use pipeline::{process_document, process_document_with, DocumentPrompts};

// --- Error Definitions ---

#[derive(Error, Debug)]
pub enum ExtractError {
    /// Zero bytes were supplied.
    #[error("No input bytes were provided")]
    MissingInput,
    #[error("Failed to compile extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// Every heuristic declined the input.
    #[error("No extraction heuristic produced text")]
    Exhausted,
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error("Prompt enhancement failed: {0}")]
    Enhance(#[from] EnhanceError),
}

impl PipelineError {
    /// True when the caller supplied no input, as opposed to an internal fault.
    pub fn is_missing_input(&self) -> bool {
        matches!(self, PipelineError::Extract(ExtractError::MissingInput))
    }
}
