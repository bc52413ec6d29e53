//! Corpus ingestion: JSON records to the document pool.
//!
//! Records are validated once here; the scoring components only ever see
//! fully-populated [`Document`] values. A record missing its query-side or
//! document-side text is a data-quality problem: it is skipped with a
//! counted skip, never a fatal error. Structural problems (an unreadable
//! directory) propagate.

use crate::error::Result;
use crate::types::{Document, Pool};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::warn;

/// A raw ingested record. Every field is optional in the input; absent
/// fields default to empty and are caught by pool validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    /// Short query-side text paired with the record.
    pub summary: String,
    /// Sectioned body text.
    pub sections: Sections,
    /// Cited references, folded into the lexical field.
    pub references: Vec<String>,
}

/// Body sections of a record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Sections {
    pub facts: String,
    pub reasoning: String,
    pub verdict: String,
}

/// Counters for records excluded during pool construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Records accepted into the pool.
    pub pooled: usize,
    /// Records skipped for empty/whitespace query-side text.
    pub skipped_missing_query: usize,
    /// Records skipped for empty/whitespace document-side text.
    pub skipped_missing_doc: usize,
    /// Files skipped because they failed to parse.
    pub skipped_unparseable: usize,
}

impl RawRecord {
    /// Assemble the lexical-side text: facts plus cited references.
    fn lexical_text(&self) -> String {
        let mut text = self.sections.facts.trim().to_string();
        if !self.references.is_empty() {
            if !text.is_empty() {
                text.push('\n');
            }
            text.push_str(&self.references.join(", "));
        }
        text
    }
}

/// Build a pool from (id, record) pairs, preserving input order.
///
/// Returns the pool together with skip counters. Pool index i refers to the
/// i-th accepted record forever after; skipped records never occupy an index.
pub fn build_pool(records: Vec<(String, RawRecord)>) -> (Pool, PoolStats) {
    let mut documents = Vec::with_capacity(records.len());
    let mut stats = PoolStats::default();

    for (id, record) in records {
        let query_text = record.summary.trim();
        if query_text.is_empty() {
            stats.skipped_missing_query += 1;
            continue;
        }
        let dense_text = record.sections.reasoning.trim();
        if dense_text.is_empty() {
            stats.skipped_missing_doc += 1;
            continue;
        }

        documents.push(Document {
            lexical_text: record.lexical_text(),
            query_text: query_text.to_string(),
            dense_text: dense_text.to_string(),
            id,
        });
        stats.pooled += 1;
    }

    (Pool::from_documents(documents), stats)
}

/// Load every `*.json` record in a directory and build the pool.
///
/// Files are visited in sorted filename order, which fixes the pool order;
/// the document id is the file stem. Unparseable files are skipped with a
/// warning and counted.
pub fn load_json_corpus(dir: &Path) -> Result<(Pool, PoolStats)> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();

    let mut unparseable = 0;
    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default()
            .to_string();

        let file = File::open(&path)?;
        match serde_json::from_reader::<_, RawRecord>(BufReader::new(file)) {
            Ok(record) => records.push((id, record)),
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unparseable record");
                unparseable += 1;
            }
        }
    }

    let (pool, mut stats) = build_pool(records);
    stats.skipped_unparseable = unparseable;
    Ok((pool, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn record(summary: &str, reasoning: &str) -> RawRecord {
        RawRecord {
            summary: summary.to_string(),
            sections: Sections {
                facts: "some facts".to_string(),
                reasoning: reasoning.to_string(),
                verdict: String::new(),
            },
            references: vec!["ref 1".to_string()],
        }
    }

    #[test]
    fn test_build_pool_skips_counted() {
        let records = vec![
            ("a".to_string(), record("summary a", "reasoning a")),
            ("b".to_string(), record("  ", "reasoning b")),
            ("c".to_string(), record("summary c", "")),
            ("d".to_string(), record("summary d", "reasoning d")),
        ];

        let (pool, stats) = build_pool(records);

        assert_eq!(pool.len(), 2);
        assert_eq!(stats.pooled, 2);
        assert_eq!(stats.skipped_missing_query, 1);
        assert_eq!(stats.skipped_missing_doc, 1);

        // Skipped records never occupy a pool index
        assert_eq!(pool.get(0).unwrap().id, "a");
        assert_eq!(pool.get(1).unwrap().id, "d");
    }

    #[test]
    fn test_lexical_text_folds_references() {
        let rec = record("s", "r");
        assert_eq!(rec.lexical_text(), "some facts\nref 1");

        let bare = RawRecord {
            summary: "s".to_string(),
            ..RawRecord::default()
        };
        assert_eq!(bare.lexical_text(), "");
    }

    #[test]
    fn test_load_json_corpus_sorted_order() {
        let tmp = TempDir::new().unwrap();

        let write = |name: &str, body: &str| {
            let mut f = File::create(tmp.path().join(name)).unwrap();
            f.write_all(body.as_bytes()).unwrap();
        };

        write(
            "b_second.json",
            r#"{"summary": "second", "sections": {"reasoning": "text b"}}"#,
        );
        write(
            "a_first.json",
            r#"{"summary": "first", "sections": {"reasoning": "text a"}}"#,
        );
        write("broken.json", "{ not json");
        write("ignored.txt", "not a record");

        let (pool, stats) = load_json_corpus(tmp.path()).unwrap();

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(0).unwrap().id, "a_first");
        assert_eq!(pool.get(1).unwrap().id, "b_second");
        assert_eq!(stats.skipped_unparseable, 1);
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        let json = r#"{
            "summary": "s",
            "sections": {"facts": "f", "reasoning": "r", "verdict": "v"},
            "references": ["x"],
            "extra_field": {"nested": true}
        }"#;
        let rec: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.summary, "s");
        assert_eq!(rec.sections.verdict, "v");
    }
}
