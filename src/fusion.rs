//! Score fusion: min-max normalization and weighted blending.
//!
//! Sparse and dense scores live on incomparable scales (unbounded BM25 sums
//! vs. cosine in [-1, 1]), so each matrix is min-max normalized over its
//! full score set before blending:
//!
//! ```text
//! fused = alpha * norm(sparse) + (1 - alpha) * norm(dense)
//! ```
//!
//! `alpha = 1.0` is pure lexical, `alpha = 0.0` is pure dense.

use crate::error::{ConfigError, EvalError, Result};
use crate::types::ScoreMatrix;
use tracing::debug;

/// Min-max normalize scores in place to [0, 1].
///
/// A degenerate all-equal score set normalizes to all zeros, avoiding a
/// division by zero.
pub fn min_max_normalize(scores: &mut [f32]) {
    let Some(&first) = scores.first() else {
        return;
    };

    let mut min = first;
    let mut max = first;
    for &s in scores.iter() {
        min = min.min(s);
        max = max.max(s);
    }

    let range = max - min;
    if range > 0.0 {
        for s in scores.iter_mut() {
            *s = (*s - min) / range;
        }
    } else {
        scores.fill(0.0);
    }
}

/// Blend normalized sparse and dense score matrices.
///
/// Validates `alpha` before shapes, and both before touching any scores.
/// Fails with [`ConfigError::AlphaOutOfRange`] or [`EvalError::ShapeMismatch`].
pub fn fuse(sparse: &ScoreMatrix, dense: &ScoreMatrix, alpha: f32) -> Result<ScoreMatrix> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(ConfigError::AlphaOutOfRange(alpha).into());
    }
    if sparse.shape() != dense.shape() {
        return Err(EvalError::ShapeMismatch {
            expected: sparse.shape(),
            got: dense.shape(),
        }
        .into());
    }

    let mut sparse_norm = sparse.clone();
    min_max_normalize(sparse_norm.values_mut());
    let mut dense_norm = dense.clone();
    min_max_normalize(dense_norm.values_mut());

    let mut fused = sparse_norm;
    for (f, &d) in fused.values_mut().iter_mut().zip(dense_norm.values()) {
        *f = alpha.mul_add(*f, (1.0 - alpha) * d);
    }

    debug!(
        shape = ?fused.shape(),
        alpha,
        "fused sparse and dense score matrices"
    );

    Ok(fused)
}
