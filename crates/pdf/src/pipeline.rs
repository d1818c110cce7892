//! # Document Pipeline
//!
//! Raw bytes in, enhanced prompts out: extract, filter candidates, enhance.

use crate::{extract::TextExtractor, PipelineError};
use animdna::{filter_candidates, ChoiceSource, EnhancedPrompt, PromptEnhancer};
use serde::Serialize;
use tracing::{info, instrument};

/// The outcome of running one document through the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentPrompts {
    /// Name of the heuristic that produced the text.
    pub heuristic: &'static str,
    /// Length of the extracted text in bytes.
    pub text_length: usize,
    /// One entry per candidate line, in document order.
    pub prompts: Vec<EnhancedPrompt>,
}

/// Runs the full pipeline with the enhancer's configured selection mode.
#[instrument(skip_all, fields(bytes = bytes.len()))]
pub fn process_document(
    bytes: &[u8],
    extractor: &TextExtractor,
    enhancer: &PromptEnhancer,
) -> Result<DocumentPrompts, PipelineError> {
    let extraction = extractor.extract(bytes)?;
    let candidates = filter_candidates(&extraction.text);
    let prompts = enhancer.enhance_all(&candidates)?;
    info!(
        heuristic = extraction.heuristic,
        candidates = prompts.len(),
        "Document processed."
    );

    Ok(DocumentPrompts {
        heuristic: extraction.heuristic,
        text_length: extraction.text.len(),
        prompts,
    })
}

/// Runs the full pipeline, drawing every phrase choice from `source`.
#[instrument(skip_all, fields(bytes = bytes.len()))]
pub fn process_document_with(
    bytes: &[u8],
    extractor: &TextExtractor,
    enhancer: &PromptEnhancer,
    source: &mut dyn ChoiceSource,
) -> Result<DocumentPrompts, PipelineError> {
    let extraction = extractor.extract(bytes)?;
    let candidates = filter_candidates(&extraction.text);
    let prompts = enhancer.enhance_all_with(&candidates, source)?;
    info!(
        heuristic = extraction.heuristic,
        candidates = prompts.len(),
        "Document processed."
    );

    Ok(DocumentPrompts {
        heuristic: extraction.heuristic,
        text_length: extraction.text.len(),
        prompts,
    })
}
