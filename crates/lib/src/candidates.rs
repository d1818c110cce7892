//! # Prompt Candidate Filter
//!
//! Splits extracted text into lines and keeps the ones that look like prompt
//! text rather than document furniture (page numbers, chapter headings, short
//! fragments left over from extraction).

use crate::types::PromptCandidate;

/// Lines must be longer than this many characters to be considered.
const MIN_LINE_CHARS: usize = 10;
/// Minimum number of whitespace-separated tokens a candidate must contain.
/// A run of spaces or tabs counts as a single separator.
const MIN_TOKENS: usize = 3;
/// Case-insensitive prefixes that mark a line as document furniture.
const FURNITURE_PREFIXES: [&str; 3] = ["page", "chapter", "section"];

/// Returns the candidate lines of `text` in document order.
pub fn filter_candidates(text: &str) -> Vec<String> {
    candidate_lines(text).map(str::to_string).collect()
}

/// Like [`filter_candidates`], but returns each line together with its metrics.
pub fn extract_candidates(text: &str) -> Vec<PromptCandidate> {
    candidate_lines(text).map(PromptCandidate::new).collect()
}

fn candidate_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| line.chars().count() > MIN_LINE_CHARS && !is_furniture(line))
        .filter(|line| line.split_whitespace().count() >= MIN_TOKENS && !is_all_digits(line))
}

/// True when the line begins with a page/chapter/section marker or a digit.
fn is_furniture(line: &str) -> bool {
    if line.starts_with(|c: char| c.is_ascii_digit()) {
        return true;
    }
    FURNITURE_PREFIXES.iter().any(|prefix| {
        line.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

fn is_all_digits(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_furniture_prefixes_are_case_insensitive() {
        assert!(is_furniture("PAGE 4 of the manual"));
        assert!(is_furniture("Chapter One begins here"));
        assert!(is_furniture("section 2.1 overview"));
        assert!(is_furniture("42 reasons to draw cels"));
        assert!(!is_furniture("A pagoda at dusk"));
    }

    #[test]
    fn test_multibyte_prefix_does_not_panic() {
        // "é" straddles the fourth byte, so the slice is not on a char boundary.
        assert!(!is_furniture("pagé robots marching"));
    }

    #[test]
    fn test_digits_only() {
        assert!(is_all_digits("1234"));
        assert!(!is_all_digits("12a4"));
        assert!(!is_all_digits(""));
    }
}
