//! Recall@k evaluation over score matrices.

use crate::error::{ConfigError, EvalError, Result};
use crate::types::ScoreMatrix;
use std::collections::BTreeMap;
use std::fmt;

/// Recall fractions keyed by cutoff k.
#[derive(Debug, Clone, PartialEq)]
pub struct RecallMetrics {
    by_k: BTreeMap<usize, f32>,
}

impl RecallMetrics {
    /// Recall at a given cutoff, if it was configured.
    pub fn get(&self, k: usize) -> Option<f32> {
        self.by_k.get(&k).copied()
    }

    /// Iterate over (k, recall) pairs in ascending k order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.by_k.iter().map(|(&k, &v)| (k, v))
    }

    /// Report as `"R@k" -> fraction`, for cross-method comparison.
    pub fn report(&self) -> BTreeMap<String, f32> {
        self.by_k
            .iter()
            .map(|(&k, &v)| (format!("R@{k}"), v))
            .collect()
    }
}

impl fmt::Display for RecallMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (&k, &v) in &self.by_k {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "R@{k}={v:.3}")?;
            first = false;
        }
        Ok(())
    }
}

/// Compute recall@k for every configured cutoff.
///
/// A query hits at k when its ground-truth document ranks among the top-k
/// by descending score, ties broken by lower document index. The rank is
/// derived once per query and serves every cutoff; no per-k re-sorting.
///
/// `ground_truth[q]` is the pool index of query q's known-correct document.
pub fn recall_at_k(
    scores: &ScoreMatrix,
    ground_truth: &[usize],
    ks: &[usize],
) -> Result<RecallMetrics> {
    if ks.is_empty() {
        return Err(ConfigError::EmptyKs.into());
    }
    if ks.contains(&0) {
        return Err(ConfigError::NonPositiveK.into());
    }

    let (num_queries, num_docs) = scores.shape();
    if num_queries == 0 {
        return Err(EvalError::EmptyQuerySet.into());
    }
    if ground_truth.len() != num_queries {
        return Err(EvalError::ShapeMismatch {
            expected: (num_queries, num_docs),
            got: (ground_truth.len(), num_docs),
        }
        .into());
    }
    for &truth in ground_truth {
        if truth >= num_docs {
            return Err(EvalError::GroundTruthOutOfRange {
                index: truth,
                doc_count: num_docs,
            }
            .into());
        }
    }

    let mut hits: BTreeMap<usize, usize> = ks.iter().map(|&k| (k, 0)).collect();

    for (q_idx, &truth) in ground_truth.iter().enumerate() {
        let row = scores.row(q_idx);
        let rank = rank_of(row, truth);
        for (&k, count) in hits.iter_mut() {
            if rank < k {
                *count += 1;
            }
        }
    }

    let by_k = hits
        .into_iter()
        .map(|(k, count)| (k, count as f32 / num_queries as f32))
        .collect();

    Ok(RecallMetrics { by_k })
}

/// 0-based rank of `truth` under descending score, ties to the lower index.
///
/// Counting the documents ranked strictly ahead gives the position the truth
/// document would hold in the fully sorted ranking, in one pass.
fn rank_of(row: &[f32], truth: usize) -> usize {
    let truth_score = row[truth];
    row.iter()
        .enumerate()
        .filter(|&(d, &score)| score > truth_score || (score == truth_score && d < truth))
        .count()
}
