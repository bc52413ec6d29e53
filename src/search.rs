//! Hybrid searcher and the interactive ranking loop.

use crate::dense;
use crate::embed::Embedder;
use crate::error::{IndexError, Result};
use crate::fusion;
use crate::lexical::LexicalIndex;
use crate::types::{Pool, RankedHit, ScoreMatrix};
use std::io::{BufRead, Write};
use tracing::warn;

/// How many results the interactive loop presents. Independent of the
/// evaluation k-set.
pub const PRESENTATION_TOP_K: usize = 15;

/// Preview length in characters.
const PREVIEW_CHARS: usize = 300;

/// In-memory hybrid searcher over the full indexed pool.
///
/// Holds the built lexical index and precomputed document embeddings; both
/// are read-only after construction and keyed by pool index.
pub struct HybridSearcher<'a> {
    pool: &'a Pool,
    lexical: LexicalIndex,
    doc_embeddings: Vec<Vec<f32>>,
    embedder: &'a dyn Embedder,
    alpha: f32,
}

impl<'a> HybridSearcher<'a> {
    /// Index the pool for hybrid search.
    ///
    /// Fails with [`IndexError::EmptyCorpus`] on an empty pool.
    pub fn new(pool: &'a Pool, embedder: &'a dyn Embedder, alpha: f32) -> Result<Self> {
        if pool.is_empty() {
            return Err(IndexError::EmptyCorpus.into());
        }
        let lexical = LexicalIndex::build(&pool.lexical_texts())?;
        let doc_embeddings = embedder.embed(&pool.dense_texts());

        Ok(Self {
            pool,
            lexical,
            doc_embeddings,
            embedder,
            alpha,
        })
    }

    /// Rank the pool against a single query and return the top `top_k` hits.
    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<RankedHit>> {
        let sparse = ScoreMatrix::from_rows(vec![self.lexical.score(query)]);
        let query_embedding = self.embedder.embed(&[query]);
        let dense = dense::score_matrix(&query_embedding, &self.doc_embeddings)?;
        let fused = fusion::fuse(&sparse, &dense, self.alpha)?;

        let row = fused.row(0);
        let mut order: Vec<usize> = (0..row.len()).collect();
        order.sort_unstable_by(|&a, &b| row[b].total_cmp(&row[a]).then(a.cmp(&b)));
        order.truncate(top_k);

        Ok(order
            .into_iter()
            .enumerate()
            .map(|(rank, doc_idx)| {
                let doc = self.pool.get(doc_idx).expect("pool index in range");
                RankedHit {
                    rank: rank + 1,
                    doc_id: doc.id.clone(),
                    score: row[doc_idx],
                    preview: preview(&doc.dense_text),
                }
            })
            .collect())
    }
}

/// Truncate text to a display preview, char-boundary safe.
fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        text.to_string()
    } else {
        let mut p: String = text.chars().take(PREVIEW_CHARS).collect();
        p.push_str("...");
        p
    }
}

/// Run the interactive ranking loop.
///
/// Line-oriented: prompts, reads a query, prints the top ranked results.
/// A case-insensitive `q` or end-of-input terminates; empty input
/// re-prompts. A scoring failure degrades to "no results" and the loop
/// continues — only explicit termination ends it.
pub fn run_interactive<R: BufRead, W: Write>(
    searcher: &HybridSearcher,
    mut input: R,
    output: &mut W,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "\nquery (q to quit): ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let query = line.trim();
        if query.eq_ignore_ascii_case("q") {
            break;
        }
        if query.is_empty() {
            continue;
        }

        match searcher.search(query, PRESENTATION_TOP_K) {
            Ok(hits) if hits.is_empty() => writeln!(output, "no results")?,
            Ok(hits) => {
                for hit in hits {
                    writeln!(
                        output,
                        "{:>2}. [{:.4}] {}\n    {}",
                        hit.rank, hit.score, hit.doc_id, hit.preview
                    )?;
                }
            }
            Err(err) => {
                warn!(%err, query, "query failed");
                writeln!(output, "no results")?;
            }
        }
    }

    Ok(())
}
