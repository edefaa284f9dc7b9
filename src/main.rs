use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use linebreaks::reader::{expand_inputs, read_stdin};
use linebreaks::{
    process_files, process_text, write_stats, ConfigFile, LineBreaks, LineBreaksConfigBuilder,
    ProcessingOptions, UNICODE_NBSP,
};

#[derive(Parser, Debug)]
#[command(name = "linebreaks")]
#[command(about = "Insert non-breaking spaces where a line break would read badly")]
#[command(version)]
struct Args {
    /// Files or glob patterns to process; stdin is read when none are given
    inputs: Vec<String>,

    /// Language code selecting weak words and shortcuts
    #[arg(short, long)]
    lang: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Literal marker inserted in place of a breakable space
    #[arg(long, conflicts_with = "unicode")]
    marker: Option<String>,

    /// Insert U+00A0 instead of the &nbsp; entity
    #[arg(long)]
    unicode: bool,

    /// Rewrite input files instead of printing to stdout
    #[arg(long)]
    in_place: bool,

    /// Abort on first unreadable input
    #[arg(long)]
    fail_fast: bool,

    /// Write per-input JSON statistics to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the transformed text, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    if args.in_place && args.inputs.is_empty() {
        anyhow::bail!("--in-place requires at least one input file");
    }

    let mut builder = match &args.config {
        Some(path) => ConfigFile::load_async(path).await?.into_builder(),
        None => LineBreaksConfigBuilder::new(),
    };
    if args.unicode {
        builder = builder.marker(UNICODE_NBSP);
    } else if let Some(marker) = &args.marker {
        builder = builder.marker(marker.as_str());
    }
    let engine = LineBreaks::new(builder.build()?)?;

    let options = ProcessingOptions {
        lang: args.lang.clone(),
        in_place: args.in_place,
        fail_fast: args.fail_fast,
    };

    let mut stdout = tokio::io::stdout();
    let stats = if args.inputs.is_empty() {
        let text = read_stdin().await?;
        let (output, stats) = process_text(&engine, "-", &text, options.lang.as_deref());
        stdout.write_all(output.as_bytes()).await?;
        vec![stats]
    } else {
        let paths = expand_inputs(args.inputs.as_slice())?;
        info!("Processing {} inputs", paths.len());
        let (outputs, stats) = process_files(&engine, &paths, &options).await?;
        for output in outputs {
            stdout.write_all(output.as_bytes()).await?;
        }
        stats
    };
    stdout.flush().await?;

    if let Some(stats_path) = &args.stats_out {
        write_stats(stats_path, &stats).await?;
        info!("Wrote stats for {} inputs to {}", stats.len(), stats_path.display());
    }

    let failed = stats.iter().filter(|s| s.error.is_some()).count();
    if failed > 0 {
        anyhow::bail!("{failed} of {} inputs could not be processed", stats.len());
    }

    Ok(())
}
