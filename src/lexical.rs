//! Lexical scoring: tokenizer, BM25, and an in-memory inverted index.

use crate::error::{IndexError, Result};
use crate::types::{DocId, ScoreMatrix};
use std::collections::HashMap;

/// BM25 parameter k1 (term frequency saturation).
const BM25_K1: f32 = 1.2;

/// BM25 parameter b (length normalization).
const BM25_B: f32 = 0.75;

/// Tokenize text into terms.
///
/// Applies: lowercase, split on non-alphanumeric, filter tokens with length > 1.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| s.len() > 1)
        .map(|s| s.to_string())
        .collect()
}

/// Calculate BM25 score for a term in a document.
///
/// The `+ 1` inside the IDF log keeps scores non-negative, so documents with
/// no term overlap land at exactly 0 rather than below it. Fusion depends on
/// this: a lexical miss must not exclude a document from the blended ranking.
///
/// # Arguments
/// * `tf` - Term frequency in the document
/// * `doc_len` - Number of terms in the document
/// * `avg_doc_len` - Average document length across corpus
/// * `doc_count` - Total number of documents
/// * `doc_freq` - Number of documents containing the term
pub fn bm25_score(tf: f32, doc_len: u32, avg_doc_len: f32, doc_count: u32, doc_freq: u32) -> f32 {
    if doc_freq == 0 || doc_count == 0 {
        return 0.0;
    }

    // IDF component: log((N - n + 0.5) / (n + 0.5) + 1)
    let n = doc_freq as f32;
    let big_n = doc_count as f32;
    let idf = ((big_n - n + 0.5) / (n + 0.5) + 1.0).ln();

    // TF component with length normalization
    let dl = doc_len as f32;
    let tf_component =
        (tf * (BM25_K1 + 1.0)) / (tf + BM25_K1 * (1.0 - BM25_B + BM25_B * dl / avg_doc_len));

    idf * tf_component
}

/// A posting entry: document index and term frequency.
#[derive(Debug, Clone)]
struct Posting {
    doc_id: DocId,
    tf: f32,
}

/// Per-term statistics and postings.
#[derive(Debug, Clone, Default)]
struct TermEntry {
    /// Number of documents containing this term.
    doc_freq: u32,
    /// Postings in pool order (each document contributes at most one).
    postings: Vec<Posting>,
}

/// BM25 index over a fixed document pool.
///
/// Immutable after [`LexicalIndex::build`]; scoring never mutates it, so the
/// same index serves both batch evaluation and the interactive loop.
#[derive(Debug, Clone)]
pub struct LexicalIndex {
    /// Vocabulary: term -> statistics and postings.
    vocab: HashMap<String, TermEntry>,
    /// Total document count.
    doc_count: u32,
    /// Average document length (in terms).
    avg_doc_len: f32,
    /// Document lengths for normalization, in pool order.
    doc_lengths: Vec<u32>,
}

impl LexicalIndex {
    /// Build the index over documents in pool order.
    ///
    /// Fails with [`IndexError::EmptyCorpus`] if given zero documents.
    pub fn build(documents: &[&str]) -> Result<Self> {
        if documents.is_empty() {
            return Err(IndexError::EmptyCorpus.into());
        }

        let mut vocab: HashMap<String, TermEntry> = HashMap::new();
        let mut doc_lengths = Vec::with_capacity(documents.len());

        for (doc_id, text) in documents.iter().enumerate() {
            let tokens = tokenize(text);
            doc_lengths.push(tokens.len() as u32);

            let mut term_freqs: HashMap<String, f32> = HashMap::new();
            for token in tokens {
                *term_freqs.entry(token).or_insert(0.0) += 1.0;
            }

            // Documents arrive in pool order, so postings stay sorted by doc_id.
            for (term, tf) in term_freqs {
                let entry = vocab.entry(term).or_default();
                entry.doc_freq += 1;
                entry.postings.push(Posting {
                    doc_id: doc_id as DocId,
                    tf,
                });
            }
        }

        let total: u32 = doc_lengths.iter().sum();
        let avg_doc_len = total as f32 / doc_lengths.len() as f32;

        Ok(Self {
            vocab,
            doc_count: documents.len() as u32,
            avg_doc_len,
            doc_lengths,
        })
    }

    /// Number of indexed documents.
    pub fn doc_count(&self) -> u32 {
        self.doc_count
    }

    /// Average document length (in terms).
    pub fn avg_doc_len(&self) -> f32 {
        self.avg_doc_len
    }

    /// Number of distinct terms.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Score a query against every pooled document.
    ///
    /// Returns one score per document, in pool order. Documents sharing no
    /// terms with the query score exactly 0. Deterministic: identical index
    /// and query text always yield identical scores.
    pub fn score(&self, query: &str) -> Vec<f32> {
        let mut scores = vec![0.0f32; self.doc_count as usize];

        for token in tokenize(query) {
            if let Some(entry) = self.vocab.get(&token) {
                for posting in &entry.postings {
                    let doc_len = self.doc_lengths[posting.doc_id as usize];
                    scores[posting.doc_id as usize] += bm25_score(
                        posting.tf,
                        doc_len,
                        self.avg_doc_len,
                        self.doc_count,
                        entry.doc_freq,
                    );
                }
            }
        }

        scores
    }

    /// Score a batch of queries into a (num_queries x num_documents) matrix.
    pub fn score_matrix(&self, queries: &[&str]) -> ScoreMatrix {
        ScoreMatrix::from_rows(queries.iter().map(|q| self.score(q)).collect())
    }
}
