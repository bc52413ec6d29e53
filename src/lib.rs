//! rankbench - benchmarking retrieval quality over a static document pool.
//!
//! Compares three ranking methods over the same in-memory pool:
//! - **Sparse lexical**: BM25 over an inverted index
//! - **Dense**: cosine similarity of unit-normalized embeddings
//! - **Hybrid fusion**: min-max normalized, alpha-weighted blend of the two
//!
//! and reports recall@k per method. A seeded disjoint split separates the
//! training pool (handed to an external training collaborator) from the
//! evaluation pool. The same indexes also back an interactive ranking loop
//! for ad-hoc queries.

pub mod config;
pub mod corpus;
pub mod dense;
pub mod embed;
pub mod error;
pub mod eval;
pub mod fusion;
pub mod lexical;
pub mod search;
pub mod split;
pub mod types;

// Re-export commonly used types
pub use config::BenchConfig;
pub use corpus::{build_pool, load_json_corpus, PoolStats, RawRecord};
pub use embed::{Embedder, HashedEmbedder};
pub use error::{ConfigError, Error, EvalError, IndexError, Result};
pub use eval::{recall_at_k, RecallMetrics};
pub use fusion::{fuse, min_max_normalize};
pub use lexical::{bm25_score, tokenize, LexicalIndex};
pub use search::{run_interactive, HybridSearcher, PRESENTATION_TOP_K};
pub use split::{disjoint_split, SplitAssignment};
pub use types::{DocId, Document, Pool, RankedHit, ScoreMatrix};
