//! Summary evaluation
//!
//! [`rouge::RougeEvaluator`] scores a candidate against a reference;
//! [`compare`] runs several summarizers over one text and scores each.

pub mod rouge;

use crate::errors::Result;
use crate::types::Summary;
use crate::variants::{Algorithm, SummaryAlgorithm};
use rouge::{RougeEvaluator, RougeScores};
use serde::Serialize;

/// One summarizer's output and its scores against the reference
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmReport {
    pub algorithm: Algorithm,
    pub summary: Summary,
    pub scores: RougeScores,
}

/// Summarize `text` with every algorithm and score each summary
///
/// Stops at the first failure; a bad `n` or an empty reference fails the
/// whole comparison.
pub fn compare(
    algorithms: &[&dyn SummaryAlgorithm],
    text: &str,
    reference: &str,
    n: usize,
) -> Result<Vec<AlgorithmReport>> {
    let evaluator = RougeEvaluator::new();
    algorithms
        .iter()
        .map(|alg| {
            let summary = alg.summarize(text, n)?;
            let scores = evaluator.score(&summary.text, reference)?;
            #[cfg(feature = "tracing")]
            tracing::info!(
                algorithm = %alg.algorithm(),
                rouge1_f1 = scores.rouge1.f1,
                rouge2_f1 = scores.rouge2.f1,
                rouge_l_f1 = scores.rouge_l.f1,
                "evaluated summary"
            );
            Ok(AlgorithmReport {
                algorithm: alg.algorithm(),
                summary,
                scores,
            })
        })
        .collect()
}
