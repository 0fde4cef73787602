//! Sentence segmentation
//!
//! The ranking core consumes a [`Document`]; how text becomes one is a
//! pluggable concern. [`UnicodeSegmenter`] is the built-in splitter.

use crate::types::Document;
use unicode_segmentation::UnicodeSegmentation;

/// Turns raw text into an ordered [`Document`]
pub trait SentenceSegmenter {
    fn segment(&self, text: &str) -> Document;
}

/// Honorifics whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &["mr.", "mrs.", "ms.", "dr.", "prof.", "st.", "jr.", "sr."];

/// Splits on UAX #29 sentence boundaries
///
/// Fragments are trimmed and whitespace-only fragments are dropped, so
/// blank lines between paragraphs never become sentences. A boundary right
/// after a title such as "Mr." is not a sentence end.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl SentenceSegmenter for UnicodeSegmenter {
    fn segment(&self, text: &str) -> Document {
        let mut sentences = Vec::new();
        let mut pending = String::new();

        for fragment in text.unicode_sentences() {
            pending.push_str(fragment);
            if ends_with_abbreviation(&pending) {
                continue;
            }
            let trimmed = pending.trim();
            if !trimmed.is_empty() {
                sentences.push(trimmed.to_string());
            }
            pending.clear();
        }
        let trimmed = pending.trim();
        if !trimmed.is_empty() {
            sentences.push(trimmed.to_string());
        }

        Document::from_texts(sentences)
    }
}

fn ends_with_abbreviation(fragment: &str) -> bool {
    fragment
        .split_whitespace()
        .next_back()
        .map(|w| {
            let w = w.trim_start_matches(|c: char| !c.is_alphanumeric());
            ABBREVIATIONS.contains(&w.to_lowercase().as_str())
        })
        .unwrap_or(false)
}
