//! Dense scoring: cosine similarity matrices over unit-normalized embeddings.

use crate::error::{IndexError, Result};
use crate::types::ScoreMatrix;

/// Compute dot product between two vectors.
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "vectors must have same dimension");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Build the (num_queries x num_documents) similarity matrix.
///
/// Computes queries against the transpose of documents via dot product,
/// which equals cosine similarity when both sides are unit-normalized by
/// the embedding provider. No normalization happens here.
///
/// Fails with [`IndexError::DimensionMismatch`] if the embedding widths
/// differ between (or within) the two collections.
pub fn score_matrix(
    query_embeddings: &[Vec<f32>],
    doc_embeddings: &[Vec<f32>],
) -> Result<ScoreMatrix> {
    check_widths(query_embeddings, doc_embeddings)?;

    let mut matrix = ScoreMatrix::zeros(query_embeddings.len(), doc_embeddings.len());
    for (q_idx, q) in query_embeddings.iter().enumerate() {
        for (d_idx, d) in doc_embeddings.iter().enumerate() {
            matrix.set(q_idx, d_idx, dot_product(q, d));
        }
    }

    Ok(matrix)
}

fn check_widths(query_embeddings: &[Vec<f32>], doc_embeddings: &[Vec<f32>]) -> Result<()> {
    let query_dim = match query_embeddings.first() {
        Some(first) => first.len(),
        None => return Ok(()),
    };
    let doc_dim = match doc_embeddings.first() {
        Some(first) => first.len(),
        None => return Ok(()),
    };

    let ragged_query = query_embeddings.iter().find(|e| e.len() != query_dim);
    if let Some(e) = ragged_query {
        return Err(IndexError::DimensionMismatch {
            query_dim,
            doc_dim: e.len(),
        }
        .into());
    }
    let ragged_doc = doc_embeddings.iter().find(|e| e.len() != doc_dim);
    if let Some(e) = ragged_doc {
        return Err(IndexError::DimensionMismatch {
            query_dim: doc_dim,
            doc_dim: e.len(),
        }
        .into());
    }
    if query_dim != doc_dim {
        return Err(IndexError::DimensionMismatch { query_dim, doc_dim }.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_dot_product() {
        let a = vec![1.0, 2.0, 3.0];
        let b = vec![4.0, 5.0, 6.0];
        assert!((dot_product(&a, &b) - 32.0).abs() < 1e-6);
    }

    #[test]
    fn test_score_matrix_cosine() {
        // Unit vectors: identical pair scores 1, orthogonal pair scores 0
        let queries = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let docs = vec![vec![1.0, 0.0], vec![0.0, 1.0]];

        let matrix = score_matrix(&queries, &docs).unwrap();
        assert_eq!(matrix.shape(), (2, 2));
        assert!((matrix.get(0, 0) - 1.0).abs() < 1e-6);
        assert!(matrix.get(0, 1).abs() < 1e-6);
        assert!(matrix.get(1, 0).abs() < 1e-6);
        assert!((matrix.get(1, 1) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_dimension_mismatch() {
        let queries = vec![vec![1.0, 0.0, 0.0]];
        let docs = vec![vec![1.0, 0.0]];

        let result = score_matrix(&queries, &docs);
        assert!(matches!(
            result,
            Err(Error::Index(IndexError::DimensionMismatch {
                query_dim: 3,
                doc_dim: 2
            }))
        ));
    }

    #[test]
    fn test_ragged_collection_rejected() {
        let queries = vec![vec![1.0, 0.0], vec![1.0, 0.0, 0.0]];
        let docs = vec![vec![1.0, 0.0]];
        assert!(score_matrix(&queries, &docs).is_err());
    }

    #[test]
    fn test_empty_query_set() {
        let queries: Vec<Vec<f32>> = Vec::new();
        let docs = vec![vec![1.0, 0.0]];

        let matrix = score_matrix(&queries, &docs).unwrap();
        assert_eq!(matrix.shape(), (0, 1));
    }
}
