use proptest::prelude::*;
use rapid_sentrank::{Document, RougeEvaluator, SummarizerConfig, TfIdfSummarizer};

const WORDS: &[&str] = &[
    "cat", "basket", "croissant", "sausage", "rosemary", "porch", "baker", "butcher", "tourist",
    "journalist", "clock", "garden", "evening", "routine", "the", "and", "of",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..8).prop_map(|w| format!("{}.", w.join(" ")))
}

fn document() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(sentence(), 1..12)
}

fn summarizer(damping: f64) -> TfIdfSummarizer {
    TfIdfSummarizer::new(SummarizerConfig {
        damping,
        ..Default::default()
    })
    .unwrap()
}

proptest! {
    #[test]
    fn scores_sum_to_one(texts in document(), damping in 0.05f64..0.95) {
        let ranks = summarizer(damping).score(&Document::from_texts(texts)).unwrap();
        let sum: f64 = ranks.scores.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
        prop_assert!(ranks.scores.iter().all(|s| *s >= 0.0 && s.is_finite()));
    }

    #[test]
    fn identical_sentences_score_equally(s in sentence(), n in 1usize..8, damping in 0.05f64..0.95) {
        let ranks = summarizer(damping).score(&Document::from_texts(vec![s; n])).unwrap();
        let expected = 1.0 / n as f64;
        for score in &ranks.scores {
            prop_assert!((score - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn best_sentence_is_selected(texts in document(), pick in 1usize..12) {
        let doc = Document::from_texts(texts);
        let n = pick.min(doc.len());
        let s = summarizer(0.85);
        let best = s.score(&doc).unwrap().ranked()[0];
        let summary = s.summarize_document(&doc, n).unwrap();
        prop_assert_eq!(summary.len(), n);
        prop_assert!(summary.indices().contains(&best));
    }

    #[test]
    fn summarization_is_deterministic(texts in document()) {
        let doc = Document::from_texts(texts);
        let s = summarizer(0.85);
        prop_assert_eq!(s.summarize_document(&doc, 1).unwrap(), s.summarize_document(&doc, 1).unwrap());
    }

    #[test]
    fn rouge_self_score_is_perfect(texts in document()) {
        let text = texts.join(" ");
        let scores = RougeEvaluator::new().score(&text, &text).unwrap();
        for s in [scores.rouge1, scores.rouge2, scores.rouge_l] {
            prop_assert!((s.precision - 1.0).abs() < 1e-12);
            prop_assert!((s.recall - 1.0).abs() < 1e-12);
            prop_assert!((s.f1 - 1.0).abs() < 1e-12);
        }
    }
}
