#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use tracing_subscriber::EnvFilter;
use trusttree::cli::Args;
use trusttree::filters::derive_filters;
use trusttree::input::read_paths;
use trusttree::render::{render_json, render_text};
use trusttree::tree::TrieBuilder;

fn main() {
    if let Err(e) = run_app() {
        eprintln!("trusttree: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_tracing(&args);

    // Reject bad regexes before touching the input.
    let filter = args.path_filter()?;

    let paths = match args.input_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("{}: failed to open input", path.display()))?;
            read_paths(BufReader::new(file))
                .with_context(|| format!("{}: failed to read input", path.display()))?
        }
        None => read_paths(io::stdin().lock()).context("failed to read standard input")?,
    };

    let mut builder = TrieBuilder::new(args.ext_mode);
    let accepted = builder.extend(&paths, &filter);
    tracing::info!(records = paths.len(), accepted, "tree built");
    let tree = builder.finish(args.min_count);

    if tree.is_empty() {
        tracing::info!("nothing left to render after pruning");
        return Ok(());
    }

    let render_config = args.render_config();
    let filters = if args.emit_filter {
        derive_filters(&tree, args.emit_filter_mode)
    } else {
        Default::default()
    };

    let mut out = BufWriter::with_capacity(64 * 1024, io::stdout().lock());
    if args.json {
        if let Some(json) = render_json(&tree, &render_config) {
            let text = serde_json::to_string_pretty(&json).context("failed to encode JSON")?;
            writeln!(out, "{text}")?;
        }
        for pattern in &filters {
            writeln!(out, "#FILTER {pattern}")?;
        }
        out.flush()?;
        return Ok(());
    }

    for line in render_text(&tree, &render_config) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    if !filters.is_empty() {
        let mut err = io::stderr().lock();
        for pattern in &filters {
            writeln!(err, "{pattern}")?;
        }
    }
    Ok(())
}
