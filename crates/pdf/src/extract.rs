use crate::{
    heuristics::{FallbackHeuristic, Heuristic, ParenthesisHeuristic, StreamHeuristic},
    ExtractError,
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// How far into the input to look for the `%PDF-` header.
const HEADER_SCAN_LIMIT: usize = 1024;

/// Text recovered from a document, with the heuristic that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub text: String,
    pub heuristic: &'static str,
}

/// Runs the extraction heuristics in priority order.
///
/// Holds only compiled patterns, so a single instance can serve concurrent
/// requests.
pub struct TextExtractor {
    heuristics: Vec<Box<dyn Heuristic>>,
}

impl std::fmt::Debug for TextExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextExtractor")
            .field("heuristics", &self.heuristic_names())
            .finish()
    }
}

impl TextExtractor {
    /// Builds the standard chain: parenthesis, stream, fallback.
    pub fn new() -> Result<Self, ExtractError> {
        Ok(Self::with_heuristics(vec![
            Box::new(ParenthesisHeuristic::new()?),
            Box::new(StreamHeuristic::new()?),
            Box::new(FallbackHeuristic),
        ]))
    }

    /// Builds an extractor from an explicit, ordered chain.
    pub fn with_heuristics(heuristics: Vec<Box<dyn Heuristic>>) -> Self {
        Self { heuristics }
    }

    pub fn heuristic_names(&self) -> Vec<&'static str> {
        self.heuristics.iter().map(|h| h.name()).collect()
    }

    /// Extracts text from `bytes`, stopping at the first heuristic that returns
    /// non-empty text.
    #[instrument(skip(self, bytes), fields(bytes = bytes.len()))]
    pub fn extract(&self, bytes: &[u8]) -> Result<Extraction, ExtractError> {
        if bytes.is_empty() {
            return Err(ExtractError::MissingInput);
        }
        if !looks_like_pdf(bytes) {
            warn!("Input has no PDF header; extracting anyway.");
        }

        for heuristic in &self.heuristics {
            match heuristic.apply(bytes) {
                Some(text) if !text.is_empty() => {
                    info!(
                        heuristic = heuristic.name(),
                        chars = text.len(),
                        "Extracted text."
                    );
                    return Ok(Extraction {
                        text,
                        heuristic: heuristic.name(),
                    });
                }
                _ => debug!(heuristic = heuristic.name(), "Heuristic found nothing."),
            }
        }

        Err(ExtractError::Exhausted)
    }
}

/// True when a `%PDF-` header appears near the start of the input.
pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(HEADER_SCAN_LIMIT)];
    head.windows(5).any(|window| window == b"%PDF-")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Never;

    impl Heuristic for Never {
        fn name(&self) -> &'static str {
            "never"
        }

        fn apply(&self, _bytes: &[u8]) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_empty_input_is_missing() {
        let extractor = TextExtractor::new().unwrap();
        assert!(matches!(
            extractor.extract(&[]),
            Err(ExtractError::MissingInput)
        ));
    }

    #[test]
    fn test_standard_chain_order() {
        let extractor = TextExtractor::new().unwrap();
        assert_eq!(
            extractor.heuristic_names(),
            vec!["parenthesis", "stream", "fallback"]
        );
    }

    #[test]
    fn test_exhausted_chain_is_an_error() {
        let extractor = TextExtractor::with_heuristics(vec![Box::new(Never)]);
        assert!(matches!(
            extractor.extract(b"anything"),
            Err(ExtractError::Exhausted)
        ));
    }

    #[test]
    fn test_header_detection() {
        assert!(looks_like_pdf(b"%PDF-1.7\n%\xe2\xe3"));
        assert!(looks_like_pdf(b"\xef\xbb\xbf%PDF-1.4"));
        assert!(!looks_like_pdf(b"plain text"));
        assert!(!looks_like_pdf(b"%PDF"));
    }
}
