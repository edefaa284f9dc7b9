// WHY: Per-input driver shared by the CLI and integration tests
// Reads each input, runs the engine and records statistics for --stats-out

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{info, warn};

use crate::reader::{AsyncFileReader, ReaderConfig};
use crate::transform::LineBreaks;

/// Per-input processing statistics
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InputStats {
    /// Input path, or "-" for stdin
    pub path: String,
    /// Characters before transformation
    pub chars_in: u64,
    /// Characters after transformation
    pub chars_out: u64,
    /// Rewrites made by all passes
    pub rewrites: u64,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Processing status (success, failed)
    pub status: String,
    /// Error message if processing failed
    pub error: Option<String>,
}

/// Options controlling how inputs are processed
#[derive(Debug, Clone, Default)]
pub struct ProcessingOptions {
    /// Language code, engine default when `None`
    pub lang: Option<String>,
    /// Rewrite files instead of returning their output
    pub in_place: bool,
    /// Abort on first unreadable input
    pub fail_fast: bool,
}

/// Transform already loaded text and build its stats entry
pub fn process_text(engine: &LineBreaks, path: &str, text: &str, lang: Option<&str>) -> (String, InputStats) {
    let start_time = std::time::Instant::now();
    let (output, transform_stats) = engine.transform_with_stats(text, lang);
    let stats = InputStats {
        path: path.to_string(),
        chars_in: text.chars().count() as u64,
        chars_out: output.chars().count() as u64,
        rewrites: transform_stats.total() as u64,
        processing_time_ms: start_time.elapsed().as_millis() as u64,
        status: "success".to_string(),
        error: None,
    };
    (output, stats)
}

/// Process files sequentially. Returns the transformed text for each input
/// that was read successfully and not rewritten in place, plus stats for every input.
pub async fn process_files<P: AsRef<Path>>(
    engine: &LineBreaks,
    paths: &[P],
    options: &ProcessingOptions,
) -> Result<(Vec<String>, Vec<InputStats>)> {
    let reader = AsyncFileReader::new(ReaderConfig {
        fail_fast: options.fail_fast,
    });
    let lang = options.lang.as_deref();

    let mut outputs = Vec::new();
    let mut all_stats = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let (content, read_stats) = reader.read_file(path).await?;

        let Some(content) = content else {
            all_stats.push(InputStats {
                path: read_stats.file_path,
                chars_in: 0,
                chars_out: 0,
                rewrites: 0,
                processing_time_ms: read_stats.duration_ms,
                status: "failed".to_string(),
                error: read_stats.read_error,
            });
            continue;
        };

        let (output, mut stats) = process_text(engine, &path.display().to_string(), &content, lang);

        if options.in_place {
            if output != content {
                write_in_place(path, &output, &mut stats, options.fail_fast).await?;
            }
        } else {
            outputs.push(output);
        }
        all_stats.push(stats);
    }

    let failed = all_stats.iter().filter(|s| s.error.is_some()).count();
    if failed > 0 {
        warn!("{} of {} inputs failed", failed, all_stats.len());
    }

    Ok((outputs, all_stats))
}

/// Rewrite `path` with `output`.
/// Without fail_fast, a failed write is recorded in `stats` and processing continues.
async fn write_in_place(path: &Path, output: &str, stats: &mut InputStats, fail_fast: bool) -> Result<()> {
    match tokio::fs::write(path, output).await {
        Ok(()) => {
            info!("Rewrote {} ({} rewrites)", path.display(), stats.rewrites);
            Ok(())
        }
        Err(e) => {
            let error_msg = format!("Failed to rewrite {}: {}", path.display(), e);
            warn!("{}", error_msg);

            if fail_fast {
                return Err(anyhow::anyhow!(error_msg));
            }

            stats.status = "failed".to_string();
            stats.error = Some(error_msg);
            Ok(())
        }
    }
}

/// Write stats as a pretty JSON array
pub async fn write_stats(stats_path: &Path, stats: &[InputStats]) -> Result<()> {
    let content = serde_json::to_string_pretty(stats)?;
    let file = tokio::fs::File::create(stats_path)
        .await
        .with_context(|| format!("Failed to create stats file {}", stats_path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
