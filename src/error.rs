//! Error types for the rankbench library.

use thiserror::Error;

/// Top-level error type for rankbench operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration validation errors.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Index building and scoring errors.
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// Evaluation errors.
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors at the ingestion boundary.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from invalid configuration, rejected before any computation.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Fusion weight outside the valid range.
    #[error("alpha must lie in [0, 1], got {0}")]
    AlphaOutOfRange(f32),

    /// A recall cutoff of zero is meaningless.
    #[error("recall cutoffs must be positive")]
    NonPositiveK,

    /// No recall cutoffs were configured.
    #[error("no recall cutoffs configured")]
    EmptyKs,
}

/// Structural errors during index building and scoring.
#[derive(Error, Debug)]
pub enum IndexError {
    /// No documents were provided for indexing.
    #[error("no documents to index")]
    EmptyCorpus,

    /// Query and document embeddings have different widths.
    #[error("embedding dimension mismatch: queries are {query_dim}, documents are {doc_dim}")]
    DimensionMismatch { query_dim: usize, doc_dim: usize },
}

/// Structural errors during evaluation. These indicate a pipeline bug,
/// never bad input data, so they are fatal to the run that hits them.
#[derive(Error, Debug)]
pub enum EvalError {
    /// Two score matrices that must align do not.
    #[error("score matrix shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Zero queries were supplied for evaluation.
    #[error("no queries to evaluate")]
    EmptyQuerySet,

    /// A ground-truth index points outside the document pool.
    #[error("ground-truth index {index} out of range for {doc_count} documents")]
    GroundTruthOutOfRange { index: usize, doc_count: usize },
}

/// Result type for rankbench operations.
pub type Result<T> = std::result::Result<T, Error>;
