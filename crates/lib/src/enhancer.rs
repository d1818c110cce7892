//! # Prompt Enhancer
//!
//! Appends 80s animation descriptors to prompt text. The original text is never
//! rewritten; the enhancer only extends it with `separator + phrase` fragments,
//! one group per vocabulary category.
//!
//! Phrase selection goes through a [`ChoiceSource`]. With
//! [`SelectionMode::Random`] two calls with the same prompt usually produce
//! different output. [`SelectionMode::Deterministic`] seeds the choices from the
//! prompt text, so a prompt always gets the same descriptors.

use crate::{
    choice::{ChoiceSource, RngChoices, ThreadChoices},
    errors::EnhanceError,
    types::EnhancedPrompt,
    vocabulary::{smallest_category_len, DescriptorCategory, CATEGORIES},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How the enhancer picks phrases when no explicit choice source is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Fresh random picks on every call.
    #[default]
    Random,
    /// Picks derived from the prompt text itself.
    Deterministic,
}

/// Tunables for [`PromptEnhancer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancerSettings {
    #[serde(default)]
    pub selection: SelectionMode,
    /// Distinct phrases taken from each category.
    #[serde(default = "default_phrases_per_category")]
    pub phrases_per_category: usize,
    /// Inserted before every appended phrase.
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_phrases_per_category() -> usize {
    1
}

fn default_separator() -> String {
    ", ".to_string()
}

impl Default for EnhancerSettings {
    fn default() -> Self {
        Self {
            selection: SelectionMode::default(),
            phrases_per_category: default_phrases_per_category(),
            separator: default_separator(),
        }
    }
}

impl EnhancerSettings {
    /// Checks the settings against the vocabulary and the export format.
    pub fn validate(&self) -> Result<(), EnhanceError> {
        let max = smallest_category_len();
        if self.phrases_per_category == 0 || self.phrases_per_category > max {
            return Err(EnhanceError::InvalidSettings(format!(
                "phrases_per_category must be between 1 and {max}, got {}",
                self.phrases_per_category
            )));
        }
        if self.separator.is_empty() {
            return Err(EnhanceError::InvalidSettings(
                "separator must not be empty".to_string(),
            ));
        }
        if self.separator.contains(['\n', '\r', '=']) {
            return Err(EnhanceError::InvalidSettings(
                "separator must not contain line breaks or '='".to_string(),
            ));
        }
        Ok(())
    }
}

/// Rewrites prompts by appending descriptor phrases.
///
/// Immutable once built, so one instance can be shared across requests.
#[derive(Debug, Clone)]
pub struct PromptEnhancer {
    settings: EnhancerSettings,
    categories: &'static [DescriptorCategory],
}

impl PromptEnhancer {
    pub fn new(settings: EnhancerSettings) -> Result<Self, EnhanceError> {
        settings.validate()?;
        Ok(Self {
            settings,
            categories: &CATEGORIES,
        })
    }

    pub fn settings(&self) -> &EnhancerSettings {
        &self.settings
    }

    /// Enhances `prompt` using the configured selection mode.
    pub fn enhance(&self, prompt: &str) -> Result<String, EnhanceError> {
        match self.settings.selection {
            SelectionMode::Random => self.enhance_with(prompt, &mut ThreadChoices),
            SelectionMode::Deterministic => {
                self.enhance_with(prompt, &mut RngChoices::from_text(prompt))
            }
        }
    }

    /// Enhances `prompt`, drawing every phrase choice from `source`.
    pub fn enhance_with(
        &self,
        prompt: &str,
        source: &mut dyn ChoiceSource,
    ) -> Result<String, EnhanceError> {
        if prompt.is_empty() {
            return Err(EnhanceError::EmptyPrompt);
        }

        let mut enhanced = String::from(prompt);
        for category in self.categories {
            for phrase in self.pick(category, source) {
                enhanced.push_str(&self.settings.separator);
                enhanced.push_str(phrase);
            }
        }
        Ok(enhanced)
    }

    /// Enhances every candidate, keeping input order and count.
    pub fn enhance_all<S: AsRef<str>>(
        &self,
        candidates: &[S],
    ) -> Result<Vec<EnhancedPrompt>, EnhanceError> {
        candidates
            .iter()
            .map(|candidate| {
                let original = candidate.as_ref();
                Ok(EnhancedPrompt {
                    original: original.to_string(),
                    enhanced: self.enhance(original)?,
                })
            })
            .collect()
    }

    /// Like [`enhance_all`](Self::enhance_all), with one source shared by all candidates.
    pub fn enhance_all_with<S: AsRef<str>>(
        &self,
        candidates: &[S],
        source: &mut dyn ChoiceSource,
    ) -> Result<Vec<EnhancedPrompt>, EnhanceError> {
        let mut prompts = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let original = candidate.as_ref();
            prompts.push(EnhancedPrompt {
                original: original.to_string(),
                enhanced: self.enhance_with(original, source)?,
            });
        }
        Ok(prompts)
    }

    /// Selects `phrases_per_category` distinct phrases with a partial shuffle.
    fn pick(
        &self,
        category: &DescriptorCategory,
        source: &mut dyn ChoiceSource,
    ) -> Vec<&'static str> {
        let mut pool: Vec<&'static str> = category.phrases.to_vec();
        let wanted = self.settings.phrases_per_category.min(pool.len());
        for i in 0..wanted {
            let j = i + source.next_choice(pool.len() - i);
            pool.swap(i, j);
        }
        pool.truncate(wanted);
        debug!(category = category.name, picked = ?pool, "Selected descriptors");
        pool
    }
}
