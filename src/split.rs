//! Disjoint train/eval split over pool indices.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::warn;

/// Disjoint training and evaluation index sets over `[0, n)`.
///
/// Produced once per run from a deterministic seed and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitAssignment {
    /// Training indices (up to the configured maximum).
    pub train: Vec<usize>,
    /// Evaluation indices.
    pub eval: Vec<usize>,
}

/// Partition pool indices into disjoint train and eval sets.
///
/// Shuffles `[0, n)` with a seeded generator (same seed, same permutation),
/// takes the first `min(eval_size, n - 1)` indices for evaluation (0 when
/// `n <= 1`, so at least one document always remains for training), then up
/// to `max_train` of the remainder for training. The two sets come from
/// non-overlapping slices of one permutation, so disjointness holds by
/// construction.
///
/// Shrinking the eval set below the requested size is documented policy for
/// small pools; it is logged at `warn` so the degradation stays visible.
pub fn disjoint_split(n: usize, eval_size: usize, max_train: usize, seed: u64) -> SplitAssignment {
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let eval_size_eff = if n > 1 { eval_size.min(n - 1) } else { 0 };
    if eval_size_eff < eval_size {
        warn!(
            requested = eval_size,
            effective = eval_size_eff,
            pool_size = n,
            "evaluation set shrunk to fit pool"
        );
    }

    let eval = indices[..eval_size_eff].to_vec();
    let remaining = &indices[eval_size_eff..];
    let train = remaining[..remaining.len().min(max_train)].to_vec();

    SplitAssignment { train, eval }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_disjoint_and_in_range() {
        for &(n, eval_size, max_train, seed) in &[
            (100, 30, 50, 0u64),
            (10, 3, 100, 7),
            (10, 20, 5, 1),
            (2, 1, 1, 99),
            (50, 49, 49, 42),
        ] {
            let split = disjoint_split(n, eval_size, max_train, seed);

            let eval: HashSet<usize> = split.eval.iter().copied().collect();
            let train: HashSet<usize> = split.train.iter().copied().collect();

            assert!(eval.is_disjoint(&train), "n={n} eval_size={eval_size}");
            assert!(eval.iter().all(|&i| i < n));
            assert!(train.iter().all(|&i| i < n));
            assert_eq!(eval.len(), split.eval.len(), "no duplicate eval indices");
            assert_eq!(train.len(), split.train.len(), "no duplicate train indices");
            assert!(split.train.len() <= max_train);
        }
    }

    #[test]
    fn test_tiny_pool_empty_eval() {
        assert!(disjoint_split(0, 10, 10, 42).eval.is_empty());
        assert!(disjoint_split(1, 10, 10, 42).eval.is_empty());

        // The single document goes to training
        let split = disjoint_split(1, 10, 10, 42);
        assert_eq!(split.train, vec![0]);
    }

    #[test]
    fn test_eval_shrinks_leaving_one_for_training() {
        let split = disjoint_split(5, 10, 10, 42);
        assert_eq!(split.eval.len(), 4);
        assert_eq!(split.train.len(), 1);
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let a = disjoint_split(200, 40, 100, 1234);
        let b = disjoint_split(200, 40, 100, 1234);
        assert_eq!(a, b);

        let c = disjoint_split(200, 40, 100, 1235);
        assert_ne!(a, c);
    }

    #[test]
    fn test_five_document_scenario() {
        // Pool of 5, eval_size=2, max_train=2: disjoint 2-element subsets
        let first = disjoint_split(5, 2, 2, 42);
        assert_eq!(first.eval.len(), 2);
        assert_eq!(first.train.len(), 2);

        let eval: HashSet<usize> = first.eval.iter().copied().collect();
        let train: HashSet<usize> = first.train.iter().copied().collect();
        assert!(eval.is_disjoint(&train));
        assert!(eval.union(&train).all(|&i| i < 5));

        // Stable across repeated runs with the same seed
        for _ in 0..3 {
            assert_eq!(disjoint_split(5, 2, 2, 42), first);
        }
    }

    #[test]
    fn test_max_train_caps_training_set() {
        let split = disjoint_split(100, 10, 20, 7);
        assert_eq!(split.eval.len(), 10);
        assert_eq!(split.train.len(), 20);
    }
}
