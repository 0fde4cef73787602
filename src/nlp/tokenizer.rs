//! Term tokenization
//!
//! Splits sentence text into lowercase terms on Unicode word boundaries
//! (UAX #29). Single-character words are dropped, which removes stray
//! initials and punctuation residue from the vocabulary. Ideographic and
//! kana words are exempt: UAX #29 yields them one character at a time.

use super::stopwords::StopwordFilter;
use unicode_segmentation::UnicodeSegmentation;

/// Minimum term length in characters (alphabetic scripts)
pub const MIN_TERM_CHARS: usize = 2;

/// Han, kana and Hangul code points
fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}'      // Hiragana, Katakana
        | '\u{3400}'..='\u{4DBF}'    // CJK Extension A
        | '\u{4E00}'..='\u{9FFF}'    // CJK Unified Ideographs
        | '\u{AC00}'..='\u{D7AF}'    // Hangul syllables
        | '\u{F900}'..='\u{FAFF}'    // CJK Compatibility Ideographs
        | '\u{FF66}'..='\u{FF9F}'    // Halfwidth Katakana
        | '\u{20000}'..='\u{2FA1F}') // Extensions B and later
}

fn is_term(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if is_cjk(first) => true,
        Some(_) => chars.count() + 1 >= MIN_TERM_CHARS,
        None => false,
    }
}

/// Tokenizer producing vocabulary terms
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
}

impl Tokenizer {
    pub fn new(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// All lowercase words of `text`, stopwords included
    pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
        text.unicode_words()
            .map(str::to_lowercase)
            .filter(|w| is_term(w))
    }

    /// Vocabulary terms of `text` in order of appearance, repeats kept
    pub fn terms(&self, text: &str) -> Vec<String> {
        Self::words(text)
            .filter(|w| !self.stopwords.is_stopword(w))
            .collect()
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }
}
