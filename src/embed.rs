//! Embedding provider contract and a deterministic stand-in implementation.
//!
//! The embedding model itself (construction, fine-tuning, checkpoints) lives
//! outside this crate. [`Embedder`] is the sole interface the dense scoring
//! path requires from it.

use crate::lexical::tokenize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Produces one fixed-width, unit-normalized vector per input text,
/// in input order.
pub trait Embedder {
    /// Embedding width.
    fn dim(&self) -> usize;

    /// Encode texts into unit-normalized vectors, preserving input order.
    fn embed(&self, texts: &[&str]) -> Vec<Vec<f32>>;
}

/// Normalize a vector to unit length (for cosine similarity via dot product).
pub fn normalize(v: &[f32]) -> Vec<f32> {
    let norm: f32 = v.iter().map(|x| x.powi(2)).sum::<f32>().sqrt();
    if norm == 0.0 {
        v.to_vec()
    } else {
        v.iter().map(|x| x / norm).collect()
    }
}

/// Deterministic hashed bag-of-tokens embedder.
///
/// Each token hashes into one of `dim` buckets; bucket counts are then
/// unit-normalized. Not a semantic model: a stand-in so the binaries and
/// tests run without one. Two identical texts always embed identically.
#[derive(Debug, Clone)]
pub struct HashedEmbedder {
    dim: usize,
    /// Token budget per text, mirroring a transformer's sequence limit.
    max_seq_length: usize,
}

impl HashedEmbedder {
    /// Create an embedder with the given width and sequence limit.
    ///
    /// A zero width is clamped to 1: every embedding has at least one
    /// bucket, so hashing never divides by zero.
    pub fn new(dim: usize, max_seq_length: usize) -> Self {
        Self {
            dim: dim.max(1),
            max_seq_length,
        }
    }

    fn embed_one(&self, text: &str) -> Vec<f32> {
        let mut buckets = vec![0.0f32; self.dim];
        for token in tokenize(text).into_iter().take(self.max_seq_length) {
            let mut hasher = DefaultHasher::new();
            token.hash(&mut hasher);
            let bucket = (hasher.finish() % self.dim as u64) as usize;
            buckets[bucket] += 1.0;
        }
        normalize(&buckets)
    }
}

impl Embedder for HashedEmbedder {
    fn dim(&self) -> usize {
        self.dim
    }

    fn embed(&self, texts: &[&str]) -> Vec<Vec<f32>> {
        texts.iter().map(|t| self.embed_one(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        let v = vec![3.0, 4.0];
        let n = normalize(&v);
        assert!((n[0] - 0.6).abs() < 1e-6);
        assert!((n[1] - 0.8).abs() < 1e-6);

        // Check it's unit length
        let len: f32 = n.iter().map(|x| x.powi(2)).sum::<f32>().sqrt();
        assert!((len - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let v = vec![0.0, 0.0, 0.0];
        assert_eq!(normalize(&v), v);
    }

    #[test]
    fn test_embed_shapes_and_order() {
        let embedder = HashedEmbedder::new(16, 512);
        let embs = embedder.embed(&["hello world", "goodbye world", "hello world"]);

        assert_eq!(embs.len(), 3);
        assert!(embs.iter().all(|e| e.len() == 16));
        // Input order preserved: identical texts embed identically
        assert_eq!(embs[0], embs[2]);
        assert_ne!(embs[0], embs[1]);
    }

    #[test]
    fn test_embed_unit_normalized() {
        let embedder = HashedEmbedder::new(8, 512);
        let embs = embedder.embed(&["some text with several tokens here"]);
        let len: f32 = embs[0].iter().map(|x| x.powi(2)).sum::<f32>().sqrt();
        assert!((len - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_embed_empty_text_is_zero_vector() {
        let embedder = HashedEmbedder::new(8, 512);
        let embs = embedder.embed(&[""]);
        assert!(embs[0].iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_zero_dim_clamped() {
        let embedder = HashedEmbedder::new(0, 512);
        assert_eq!(embedder.dim(), 1);

        // Embedding must not panic; a single bucket normalizes to 1.0
        let embs = embedder.embed(&["hello world"]);
        assert_eq!(embs[0], vec![1.0]);
    }

    #[test]
    fn test_max_seq_length_truncates() {
        let short = HashedEmbedder::new(8, 2);
        let long = HashedEmbedder::new(8, 512);
        let text = "alpha beta gamma delta epsilon";
        // Truncated embedding only sees the first two tokens
        assert_eq!(
            short.embed(&[text])[0],
            long.embed(&["alpha beta"])[0]
        );
    }
}
