//! Batch retrieval-quality benchmark.
//!
//! Loads a JSON corpus, splits it into disjoint train/eval index sets, then
//! scores the evaluation queries against the full pool three ways (BM25,
//! dense cosine, weighted fusion) and reports recall@k per method.
//!
//! Usage:
//! ```bash
//! cargo run --release --bin benchmark -- \
//!   --data ./corpus --seed 42 --eval-size 300 --alpha 0.5 --dim 256
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use rankbench::{
    disjoint_split, fuse, load_json_corpus, recall_at_k, BenchConfig, Embedder, HashedEmbedder,
    LexicalIndex, RecallMetrics,
};
use std::path::PathBuf;

#[derive(Debug, Clone)]
struct Args {
    data: PathBuf,
    dim: usize,
    config: BenchConfig,
}

impl Args {
    fn from_args() -> Self {
        let mut data = PathBuf::from("./corpus");
        let mut dim: usize = 256;
        let mut config = BenchConfig::default();

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
                "--seed" => {
                    i += 1;
                    config.seed = args.get(i).and_then(|s| s.parse().ok()).unwrap_or(config.seed);
                }
                "--eval-size" => {
                    i += 1;
                    config.eval_size = args
                        .get(i)
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(config.eval_size);
                }
                "--max-train" => {
                    i += 1;
                    config.max_train = args
                        .get(i)
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(config.max_train);
                }
                "--alpha" => {
                    i += 1;
                    config.alpha = args
                        .get(i)
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(config.alpha);
                }
                "--max-seq-length" => {
                    i += 1;
                    config.max_seq_length = args
                        .get(i)
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(config.max_seq_length);
                }
                _ => {}
            }
            i += 1;
        }

        Self { data, dim, config }
    }
}

fn embed_with_progress(embedder: &dyn Embedder, texts: &[&str], label: &str) -> Vec<Vec<f32>> {
    let pb = ProgressBar::new(texts.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.magenta/blue}] {pos}/{len} ({eta}) {msg}",
        )
        .unwrap(),
    );
    pb.set_message(label.to_string());

    let mut embeddings = Vec::with_capacity(texts.len());
    for chunk in texts.chunks(256) {
        embeddings.extend(embedder.embed(chunk));
        pb.inc(chunk.len() as u64);
    }
    pb.finish_with_message(format!("{label} done"));
    embeddings
}

fn print_metrics(method: &str, metrics: &RecallMetrics) {
    print!("{method:>8} |");
    for (k, value) in metrics.iter() {
        print!(" R@{k}={value:.3}");
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::from_args();
    args.config.validate()?;
    if args.dim == 0 {
        return Err("embedding dimension must be at least 1".into());
    }

    println!("Retrieval Quality Benchmark");
    println!("===========================");
    println!("Corpus directory: {}", args.data.display());
    println!("Seed: {}", args.config.seed);
    println!("Eval size: {}", args.config.eval_size);
    println!("Max train: {}", args.config.max_train);
    println!("Alpha: {}", args.config.alpha);
    println!("Embedding dimension: {}", args.dim);
    println!();

    let (pool, stats) = load_json_corpus(&args.data)?;
    println!(
        "Pooled {} documents (skipped: {} missing query, {} missing text, {} unparseable)",
        pool.len(),
        stats.skipped_missing_query,
        stats.skipped_missing_doc,
        stats.skipped_unparseable
    );

    let split = disjoint_split(
        pool.len(),
        args.config.eval_size,
        args.config.max_train,
        args.config.seed,
    );
    println!(
        "Split: {} train / {} eval (disjoint)",
        split.train.len(),
        split.eval.len()
    );
    // Training indices feed the external fine-tuning pipeline; this binary
    // only consumes the evaluation side.

    let query_texts = pool.query_texts();
    let eval_queries: Vec<&str> = split.eval.iter().map(|&i| query_texts[i]).collect();

    // Sparse: BM25 over the full pool's lexical field
    println!("\nBuilding lexical index...");
    let lexical = LexicalIndex::build(&pool.lexical_texts())?;
    println!(
        "Indexed {} documents, {} terms",
        lexical.doc_count(),
        lexical.vocab_size()
    );
    let sparse = lexical.score_matrix(&eval_queries);

    // Dense: embed the full pool and the evaluation queries
    let embedder = HashedEmbedder::new(args.dim, args.config.max_seq_length);
    let doc_embeddings = embed_with_progress(&embedder, &pool.dense_texts(), "Embedding documents");
    let query_embeddings = embed_with_progress(&embedder, &eval_queries, "Embedding queries");
    let dense = rankbench::dense::score_matrix(&query_embeddings, &doc_embeddings)?;

    // Fused
    let fused = fuse(&sparse, &dense, args.config.alpha)?;

    // Ground truth: each eval query's correct document is its own pool index
    let sparse_metrics = recall_at_k(&sparse, &split.eval, &args.config.ks)?;
    let dense_metrics = recall_at_k(&dense, &split.eval, &args.config.ks)?;
    let fused_metrics = recall_at_k(&fused, &split.eval, &args.config.ks)?;

    println!("\n================ FINAL SUMMARY ================");
    print_metrics("sparse", &sparse_metrics);
    print_metrics("dense", &dense_metrics);
    print_metrics("fused", &fused_metrics);

    Ok(())
}
