use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use hnsearch_core::config;
use hnsearch_core::storage;
use hnsearch_core::stories::{run, HttpStoryClient, Story};
use hnsearch_core::SearchSession;
use tracing_subscriber::EnvFilter;

/// Search Hacker News once and print each story as a JSON line.
#[derive(Debug, Parser)]
#[command(name = "hnsearch-query", version)]
struct Args {
    /// Search term. Defaults to the last one used; a given term is remembered.
    term: Option<String>,

    /// Config file instead of ~/.config/hnsearch/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    // stdout carries the JSONL
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };

    if args.term.as_deref() == Some("") {
        eprintln!("hnsearch-query: search term must not be empty");
        process::exit(2);
    }

    let mut session = SearchSession::new(storage::open_default(), &config);
    if let Some(term) = args.term {
        session.on_search_input(term);
        // unchanged terms keep the URL already committed at startup
        let _ = session.on_search_submit();
    }
    let url = session.committed_url().to_string();

    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("hnsearch-query: failed to create tokio runtime: {e}");
            process::exit(2);
        }
    };

    let client = HttpStoryClient::new();
    rt.block_on(run(&client, &url, |action| session.apply(action)));

    let state = session.view_state();
    if state.is_error {
        eprintln!("hnsearch-query: search failed for {url}");
        process::exit(2);
    }

    let stdout = io::stdout();
    if let Err(e) = write_jsonl(&state.data, &mut stdout.lock()) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("hnsearch-query: {e}");
            process::exit(2);
        }
    }
}

/// One story per line, API field names.
fn write_jsonl<W: Write>(stories: &[Story], out: &mut W) -> io::Result<()> {
    for story in stories {
        serde_json::to_writer(&mut *out, story)?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
