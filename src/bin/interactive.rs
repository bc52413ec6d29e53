//! Interactive hybrid search over a JSON corpus.
//!
//! Builds the lexical index and document embeddings over the full pool once,
//! then answers queries from stdin until `q` or end-of-input.
//!
//! Usage:
//! ```bash
//! cargo run --release --bin interactive -- --data ./corpus --alpha 0.5
//! ```

use rankbench::{load_json_corpus, run_interactive, BenchConfig, HashedEmbedder, HybridSearcher};
use std::io::{stdin, stdout};
use std::path::PathBuf;

#[derive(Debug, Clone)]
struct Args {
    data: PathBuf,
    dim: usize,
    alpha: f32,
    max_seq_length: usize,
}

impl Args {
    fn from_args() -> Self {
        let defaults = BenchConfig::default();
        let mut data = PathBuf::from("./corpus");
        let mut dim: usize = 256;
        let mut alpha = defaults.alpha;
        let mut max_seq_length = defaults.max_seq_length;

        let args: Vec<String> = std::env::args().collect();
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--data" => {
                    i += 1;
                    if let Some(path) = args.get(i) {
                        data = PathBuf::from(path);
                    }
                }
                "--dim" => {
                    i += 1;
                    dim = args.get(i).and_then(|s| s.parse().ok()).unwrap_or(256);
                }
                "--alpha" => {
                    i += 1;
                    alpha = args.get(i).and_then(|s| s.parse().ok()).unwrap_or(alpha);
                }
                "--max-seq-length" => {
                    i += 1;
                    max_seq_length = args
                        .get(i)
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(max_seq_length);
                }
                _ => {}
            }
            i += 1;
        }

        Self {
            data,
            dim,
            alpha,
            max_seq_length,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::from_args();
    let config = BenchConfig {
        alpha: args.alpha,
        max_seq_length: args.max_seq_length,
        ..BenchConfig::default()
    };
    config.validate()?;
    if args.dim == 0 {
        return Err("embedding dimension must be at least 1".into());
    }

    println!("Loading corpus from {}...", args.data.display());
    let (pool, stats) = load_json_corpus(&args.data)?;
    println!(
        "Pooled {} documents ({} records skipped)",
        pool.len(),
        stats.skipped_missing_query + stats.skipped_missing_doc + stats.skipped_unparseable
    );

    println!("Indexing...");
    let embedder = HashedEmbedder::new(args.dim, config.max_seq_length);
    let searcher = HybridSearcher::new(&pool, &embedder, config.alpha)?;
    println!("Ready.");

    run_interactive(&searcher, stdin().lock(), &mut stdout())?;
    println!("Exiting.");

    Ok(())
}
