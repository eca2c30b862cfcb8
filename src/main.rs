// src/main.rs
mod aggregator;
mod extractors;
mod sources;
mod storage;
mod utils;

use clap::Parser;
use storage::StorageManager;
use utils::AppError;

/// Builds a scripture verse corpus (canonical "Book Chapter:Verse" keys to
/// verse text) from public-domain sources and writes it as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Output path for the verse corpus JSON
    #[arg(short, long, default_value = "lds_scriptures_full.json")]
    output: String,

    /// Study-site page fragment to fetch (repeatable); defaults to a small
    /// sample of D&C and Pearl of Great Price pages
    #[arg(long = "fragment")]
    fragments: Vec<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::info!("Starting corpus build for args: {:?}", args);

    // 3. Initialize storage and HTTP client
    let storage = StorageManager::new(&args.output)?;
    let client = sources::client::build_client(args.timeout_secs).map_err(AppError::Client)?;

    let fragments = if args.fragments.is_empty() {
        sources::catalog::default_study_fragments()
    } else {
        args.fragments.clone()
    };

    // 4. Run every extraction pipeline and merge
    let outcome = aggregator::run(&client, &fragments).await;

    for report in &outcome.reports {
        match &report.error {
            Some(err) => tracing::warn!("{}: 0 verses (failed: {})", report.source, err),
            None => tracing::info!("{}: {} verses", report.source, report.verses),
        }
    }

    // 5. Persist the merged corpus; a write failure here is fatal
    let total = outcome.corpus.len();
    tracing::info!("Writing {} entries to {}", total, args.output);
    storage.save_corpus(&outcome.corpus)?;

    // The metadata sidecar is diagnostic only; failing to write it does not
    // fail the run.
    if let Err(e) = storage.save_run_metadata(&outcome.reports, total) {
        tracing::warn!("Failed to save run metadata: {}", e);
    }

    tracing::info!("Done.");
    Ok(())
}
