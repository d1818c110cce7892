//! # Plain-Text Export
//!
//! Renders enhanced prompts as the downloadable text document.

use crate::types::EnhancedPrompt;

/// Suggested file name for the export document.
pub const EXPORT_FILE_NAME: &str = "80s-animation-prompts.txt";

/// Renders one numbered section per prompt.
///
/// Each section lists the 1-based index, the original text and the enhanced
/// text. Sections are joined with a newline, so consecutive sections are
/// separated by blank lines. An empty slice renders as an empty string.
pub fn render_export(prompts: &[EnhancedPrompt]) -> String {
    prompts
        .iter()
        .enumerate()
        .map(|(idx, prompt)| {
            format!(
                "===== PROMPT {} =====\nORIGINAL:\n{}\n\n80s ANIMATION VERSION:\n{}\n\n",
                idx + 1,
                prompt.original,
                prompt.enhanced
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
