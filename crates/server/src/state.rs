//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. Everything in it is immutable after startup, so
//! handlers share it freely and requests stay isolated from each other.

use crate::config::AppConfig;
use animdna::PromptEnhancer;
use animdna_pdf::TextExtractor;
use std::sync::Arc;
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The application's configuration.
    pub config: Arc<AppConfig>,
    /// The heuristic text extractor with its compiled patterns.
    pub extractor: Arc<TextExtractor>,
    /// The prompt enhancer, configured from `config.enhancer`.
    pub enhancer: Arc<PromptEnhancer>,
}

/// Builds the shared application state from the configuration.
///
/// Fails when the enhancer settings are invalid or the extraction patterns do
/// not compile, so a misconfigured server never starts listening.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let extractor = TextExtractor::new()?;
    let enhancer = PromptEnhancer::new(config.enhancer.clone())?;
    info!(
        heuristics = ?extractor.heuristic_names(),
        selection = ?config.enhancer.selection,
        phrases_per_category = config.enhancer.phrases_per_category,
        "Initialized extraction pipeline."
    );

    Ok(AppState {
        config: Arc::new(config),
        extractor: Arc::new(extractor),
        enhancer: Arc::new(enhancer),
    })
}
