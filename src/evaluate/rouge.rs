//! ROUGE-1, ROUGE-2 and ROUGE-L
//!
//! Texts are lowercased and split on anything that is not alphanumeric.
//! ROUGE-N uses clipped n-gram counts; ROUGE-L uses the longest common
//! subsequence of the two token sequences.

use crate::errors::{Result, SummarizeError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Precision, recall and F1 for one metric
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RougeScore {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl RougeScore {
    fn from_overlap(overlap: usize, candidate_total: usize, reference_total: usize) -> Self {
        // Both sides too short for this order: nothing to disagree on.
        if candidate_total == 0 && reference_total == 0 {
            return Self {
                precision: 1.0,
                recall: 1.0,
                f1: 1.0,
            };
        }
        let precision = ratio(overlap, candidate_total);
        let recall = ratio(overlap, reference_total);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self {
            precision,
            recall,
            f1,
        }
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RougeScores {
    #[serde(rename = "rouge-1")]
    pub rouge1: RougeScore,
    #[serde(rename = "rouge-2")]
    pub rouge2: RougeScore,
    #[serde(rename = "rouge-l")]
    pub rouge_l: RougeScore,
}

/// Scores a candidate summary against a reference summary
#[derive(Debug, Clone, Copy, Default)]
pub struct RougeEvaluator;

impl RougeEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Fails with `InvalidInput` if either text has no words
    pub fn score(&self, candidate: &str, reference: &str) -> Result<RougeScores> {
        let cand = tokenize(candidate);
        let refr = tokenize(reference);
        if cand.is_empty() {
            return Err(SummarizeError::invalid_input("candidate summary is empty"));
        }
        if refr.is_empty() {
            return Err(SummarizeError::invalid_input("reference summary is empty"));
        }

        Ok(RougeScores {
            rouge1: rouge_n(&cand, &refr, 1),
            rouge2: rouge_n(&cand, &refr, 2),
            rouge_l: rouge_l(&cand, &refr),
        })
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn ngram_counts(tokens: &[String], n: usize) -> FxHashMap<&[String], usize> {
    let mut counts = FxHashMap::default();
    if tokens.len() >= n {
        for gram in tokens.windows(n) {
            *counts.entry(gram).or_insert(0) += 1;
        }
    }
    counts
}

fn rouge_n(candidate: &[String], reference: &[String], n: usize) -> RougeScore {
    let cand = ngram_counts(candidate, n);
    let refr = ngram_counts(reference, n);

    let overlap: usize = cand
        .iter()
        .map(|(gram, &c)| refr.get(gram).map_or(0, |&r| c.min(r)))
        .sum();

    RougeScore::from_overlap(overlap, cand.values().sum(), refr.values().sum())
}

fn rouge_l(candidate: &[String], reference: &[String]) -> RougeScore {
    let lcs = lcs_len(candidate, reference);
    RougeScore::from_overlap(lcs, candidate.len(), reference.len())
}

/// Longest common subsequence length, two-row dynamic programme
fn lcs_len(a: &[String], b: &[String]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for x in a {
        for (j, y) in b.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_perfect(score: RougeScore) {
        assert!((score.precision - 1.0).abs() < 1e-12);
        assert!((score.recall - 1.0).abs() < 1e-12);
        assert!((score.f1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_identical_texts_score_one() {
        let text = "Whiskers, Mr. Pemberton's cat, collects food from the townsfolk.";
        let scores = RougeEvaluator::new().score(text, text).unwrap();

        assert_perfect(scores.rouge1);
        assert_perfect(scores.rouge2);
        assert_perfect(scores.rouge_l);
    }

    #[test]
    fn test_single_word_identity() {
        let scores = RougeEvaluator::new().score("Whiskers", "whiskers!").unwrap();
        assert_perfect(scores.rouge1);
        assert_perfect(scores.rouge2);
        assert_perfect(scores.rouge_l);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        let scores = RougeEvaluator::new().score("dogs bark", "cats purr").unwrap();

        assert_eq!(scores.rouge1, RougeScore::default());
        assert_eq!(scores.rouge2, RougeScore::default());
        assert_eq!(scores.rouge_l, RougeScore::default());
    }

    #[test]
    fn test_partial_overlap() {
        // candidate: the cat sat            (3 unigrams, 2 bigrams)
        // reference: the cat sat on the mat (6 unigrams, 5 bigrams)
        let scores = RougeEvaluator::new()
            .score("The cat sat.", "The cat sat on the mat.")
            .unwrap();

        assert!((scores.rouge1.precision - 1.0).abs() < 1e-12);
        assert!((scores.rouge1.recall - 0.5).abs() < 1e-12);
        assert!((scores.rouge2.precision - 1.0).abs() < 1e-12);
        assert!((scores.rouge2.recall - 0.4).abs() < 1e-12);
        assert!((scores.rouge_l.recall - 0.5).abs() < 1e-12);
        assert!((scores.rouge1.f1 - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_clipped_counts() {
        // "the" appears three times in the candidate but once in the reference
        let scores = RougeEvaluator::new().score("the the the", "the cat").unwrap();

        assert!((scores.rouge1.precision - 1.0 / 3.0).abs() < 1e-12);
        assert!((scores.rouge1.recall - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_lcs_respects_order() {
        let a: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        let b: Vec<String> = ["b", "d", "a", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(lcs_len(&a, &b), 2);
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let evaluator = RougeEvaluator::new();

        assert!(matches!(
            evaluator.score("summary", "  ...  "),
            Err(SummarizeError::InvalidInput(_))
        ));
        assert!(matches!(
            evaluator.score("", "reference"),
            Err(SummarizeError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_serializes_with_metric_names() {
        let scores = RougeEvaluator::new().score("a cat", "a cat").unwrap();
        let json = serde_json::to_value(scores).unwrap();

        assert!(json.get("rouge-1").is_some());
        assert!(json["rouge-l"]["f1"].as_f64().is_some());
    }
}
