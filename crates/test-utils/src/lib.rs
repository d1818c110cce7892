use animdna::ChoiceSource;
use std::collections::VecDeque;

// --- Synthetic Documents ---

/// Builds a minimal PDF-shaped buffer whose single content stream shows each
/// entry of `runs` with a `Tj` operator.
///
/// Only the parenthesised runs carry parentheses; the surrounding structure is
/// free of them, so the parenthesis heuristic sees exactly `runs`.
pub fn pdf_with_text_runs(runs: &[&str]) -> Vec<u8> {
    let mut content = String::from("BT\n/F1 12 Tf\n72 712 Td\n");
    for run in runs {
        content.push_str(&format!("({run}) Tj\n0 -14 Td\n"));
    }
    content.push_str("ET");
    wrap_in_document(content.as_bytes())
}

/// Builds a PDF-shaped buffer with one raw content stream and no parentheses.
pub fn pdf_with_stream(stream: &[u8]) -> Vec<u8> {
    wrap_in_document(stream)
}

fn wrap_in_document(stream: &[u8]) -> Vec<u8> {
    let mut doc = Vec::new();
    doc.extend_from_slice(b"%PDF-1.4\n%\xe2\xe3\xcf\xd3\n");
    doc.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");
    doc.extend_from_slice(b"2 0 obj\n<< /Type /Pages /Kids [3 0 R] /Count 1 >>\nendobj\n");
    doc.extend_from_slice(
        b"3 0 obj\n<< /Type /Page /Parent 2 0 R /Contents 4 0 R >>\nendobj\n",
    );
    doc.extend_from_slice(format!("4 0 obj\n<< /Length {} >>\nstream\n", stream.len()).as_bytes());
    doc.extend_from_slice(stream);
    doc.extend_from_slice(b"\nendstream\nendobj\ntrailer\n<< /Root 1 0 R >>\n%%EOF\n");
    doc
}

// --- Choice Sources ---

/// Replays a fixed list of choices, then keeps answering 0.
///
/// Each scripted value is clamped into range, so any script is valid.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoices {
    script: VecDeque<usize>,
    calls: usize,
}

impl ScriptedChoices {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            calls: 0,
        }
    }

    /// Number of choices handed out so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl ChoiceSource for ScriptedChoices {
    fn next_choice(&mut self, options: usize) -> usize {
        self.calls += 1;
        let next = self.script.pop_front().unwrap_or(0);
        next.min(options.saturating_sub(1))
    }
}
