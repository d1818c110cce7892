//! # Extraction Heuristics
//!
//! Each heuristic looks at the raw bytes on its own and either returns text or
//! declines with `None`. [`TextExtractor`](crate::TextExtractor) chains them.

use regex::{bytes::Regex as BytesRegex, Regex};

/// Parenthesised runs of this many characters or fewer are treated as noise.
const MIN_PAREN_CHARS: usize = 2;

/// A single best-effort strategy for pulling text out of document bytes.
pub trait Heuristic: Send + Sync {
    /// Short name used in logs and debug output.
    fn name(&self) -> &'static str;

    /// Returns the extracted text, or `None` when nothing usable was found.
    fn apply(&self, bytes: &[u8]) -> Option<String>;
}

/// Replaces every byte outside `0x20..=0x7E` (except `\n`) with a space.
///
/// The output has exactly as many bytes as the input.
pub fn sanitize(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| {
            if (0x20..=0x7E).contains(&b) || b == b'\n' {
                b as char
            } else {
                ' '
            }
        })
        .collect()
}

/// Collects the contents of `( ... )` runs, the way text-showing operators
/// store literal strings in content streams.
#[derive(Debug, Clone)]
pub struct ParenthesisHeuristic {
    pattern: Regex,
}

impl ParenthesisHeuristic {
    pub fn new() -> Result<Self, regex::Error> {
        // Shortest match, never across a line break.
        Ok(Self {
            pattern: Regex::new(r"\(([^\n\r]*?)\)")?,
        })
    }
}

impl Heuristic for ParenthesisHeuristic {
    fn name(&self) -> &'static str {
        "parenthesis"
    }

    fn apply(&self, bytes: &[u8]) -> Option<String> {
        let text = String::from_utf8_lossy(bytes);
        let runs: Vec<&str> = self
            .pattern
            .captures_iter(&text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|run| run.chars().count() > MIN_PAREN_CHARS)
            .collect();
        let joined = runs.join("\n");
        (!joined.is_empty()).then_some(joined)
    }
}

/// Sanitizes the bytes between `stream` and `endstream` keywords.
#[derive(Debug, Clone)]
pub struct StreamHeuristic {
    pattern: BytesRegex,
}

impl StreamHeuristic {
    pub fn new() -> Result<Self, regex::Error> {
        // `\bstream` keeps the tail of `endstream` from opening a region.
        Ok(Self {
            pattern: BytesRegex::new(r"(?s-u)\bstream\b\s*(.*?)\s*endstream")?,
        })
    }
}

impl Heuristic for StreamHeuristic {
    fn name(&self) -> &'static str {
        "stream"
    }

    fn apply(&self, bytes: &[u8]) -> Option<String> {
        let regions: Vec<String> = self
            .pattern
            .captures_iter(bytes)
            .filter_map(|caps| caps.get(1))
            .map(|m| sanitize(m.as_bytes()))
            .collect();
        let joined = regions.join("\n");
        (!joined.is_empty()).then_some(joined)
    }
}

/// Treats the whole input as text.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackHeuristic;

impl Heuristic for FallbackHeuristic {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn apply(&self, bytes: &[u8]) -> Option<String> {
        Some(sanitize(bytes))
    }
}
