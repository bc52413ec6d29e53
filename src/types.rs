//! Core types for the retrieval benchmark.

/// Document identifier type (position within the pool).
pub type DocId = u32;

/// A pooled document with the text fields used by the two scoring paths.
///
/// The lexical and dense fields may differ: lexical scoring typically works
/// best over terse factual text, dense scoring over discursive text.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Stable string key (e.g. source file stem).
    pub id: String,
    /// Query-side text paired with this document (evaluation only).
    pub query_text: String,
    /// Text indexed by the lexical scorer.
    pub lexical_text: String,
    /// Text encoded by the embedding provider.
    pub dense_text: String,
}

/// An ordered, immutable document collection.
///
/// Pool position is the single source of truth for document identity: every
/// derived structure (lexical index, embedding list, score matrix column) is
/// keyed by and ordered identically to the pool. The pool is never reordered
/// after construction.
#[derive(Debug, Clone, Default)]
pub struct Pool {
    documents: Vec<Document>,
}

impl Pool {
    /// Create a pool from an ordered document sequence.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Number of pooled documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the pool is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Get a document by pool index.
    pub fn get(&self, index: usize) -> Option<&Document> {
        self.documents.get(index)
    }

    /// Iterate over documents in pool order.
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    /// Lexical-side texts in pool order.
    pub fn lexical_texts(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.lexical_text.as_str()).collect()
    }

    /// Dense-side texts in pool order.
    pub fn dense_texts(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.dense_text.as_str()).collect()
    }

    /// Query-side texts in pool order.
    pub fn query_texts(&self) -> Vec<&str> {
        self.documents.iter().map(|d| d.query_text.as_str()).collect()
    }
}

/// A dense 2-D score matrix, shape (num_queries x num_documents).
///
/// Stored row-major in a flat buffer. Cell (q, d) is the relevance of query
/// q to pool document d under one scoring method. All matrices compared in
/// one evaluation run share this shape and column semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl ScoreMatrix {
    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Create a matrix from row vectors. All rows must have equal length.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Self {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for row in &rows {
            debug_assert_eq!(row.len(), n_cols, "rows must have equal length");
            data.extend_from_slice(row);
        }
        Self {
            data,
            rows: n_rows,
            cols: n_cols,
        }
    }

    /// Matrix shape as (rows, cols).
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of query rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of document columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get one query row as a slice.
    pub fn row(&self, index: usize) -> &[f32] {
        let start = index * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Get a single cell.
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    /// Set a single cell.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.cols + col] = value;
    }

    /// The full score set as a flat slice (row-major).
    pub fn values(&self) -> &[f32] {
        &self.data
    }

    /// Mutable access to the full score set.
    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

/// A ranked result returned by the interactive searcher.
#[derive(Debug, Clone)]
pub struct RankedHit {
    /// 1-based presentation rank.
    pub rank: usize,
    /// Document string key.
    pub doc_id: String,
    /// Fused relevance score.
    pub score: f32,
    /// Truncated document text for display.
    pub preview: String,
}
