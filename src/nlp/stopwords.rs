//! Stopword filtering
//!
//! Decides which terms enter a document's vocabulary. Lists come from the
//! `stop-words` crate, keyed by a language tag, and can be extended with
//! caller-supplied words.

use crate::types::SummarizerConfig;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A lowercase stopword set
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a filter for the given language tag
    ///
    /// Supported: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi, hu, tr, pl,
    /// ar, zh, ja. Unknown tags fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: load_stopwords(language),
        }
    }

    /// Built-in list for `cfg.language` extended with `cfg.stopwords`
    pub fn from_config(cfg: &SummarizerConfig) -> Self {
        let mut filter = Self::new(&cfg.language);
        filter.extend(cfg.stopwords.iter().map(String::as_str));
        filter
    }

    /// A filter that keeps every term
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// A filter built only from `words`
    pub fn from_list(words: &[&str]) -> Self {
        let mut filter = Self::empty();
        filter.extend(words.iter().copied());
        filter
    }

    pub fn extend<'a>(&mut self, words: impl IntoIterator<Item = &'a str>) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Case-insensitive membership test
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        let lower = word.to_lowercase();
        lower != word && self.stopwords.contains(&lower)
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

fn load_stopwords(language: &str) -> FxHashSet<String> {
    let lang = match language.to_lowercase().as_str() {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        "tr" | "turkish" => LANGUAGE::Turkish,
        "pl" | "polish" => LANGUAGE::Polish,
        "ar" | "arabic" => LANGUAGE::Arabic,
        "zh" | "chinese" => return owned(CHINESE),
        "ja" | "japanese" => return owned(JAPANESE),
        _ => LANGUAGE::English,
    };

    get(lang).iter().map(|s| s.to_string()).collect()
}

fn owned(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|s| s.to_string()).collect()
}

// The stop-words crate ships no CJK lists.
const CHINESE: &[&str] = &[
    "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及", "这",
    "那", "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对", "将", "于",
    "能", "会", "可", "要", "很", "还", "更", "最", "只", "已", "又", "再",
];

const JAPANESE: &[&str] = &[
    "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる",
    "も", "する", "から", "な", "こと", "として", "い", "や", "など", "なっ", "ない", "この",
    "ため", "その", "あっ", "よう", "また", "もの", "という", "あり", "まで", "られ", "なる",
    "へ", "か", "だ", "これ", "によって", "により", "おり",
];
