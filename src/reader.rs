use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

/// Configuration for input reading behavior
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
}

/// Statistics for one read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Expand CLI input arguments into concrete file paths.
///
/// Arguments containing glob metacharacters are expanded and sorted; plain
/// paths are kept as given so a missing file surfaces as a read error later.
pub fn expand_inputs<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        if !pattern.contains(['*', '?', '[']) {
            paths.push(PathBuf::from(pattern));
            continue;
        }

        let mut matched: Vec<PathBuf> = glob(pattern)
            .with_context(|| format!("Invalid glob pattern: {pattern}"))?
            .filter_map(|entry| match entry {
                Ok(path) if path.is_file() => Some(path),
                Ok(_) => None,
                Err(e) => {
                    warn!("Skipping unreadable glob entry: {}", e);
                    None
                }
            })
            .collect();
        matched.sort();

        if matched.is_empty() {
            warn!("Pattern matched no files: {}", pattern);
        }
        debug!("Pattern {} matched {} files", pattern, matched.len());
        paths.extend(matched);
    }

    Ok(paths)
}

/// Async reader loading whole inputs so line endings survive untouched
pub struct AsyncFileReader {
    config: ReaderConfig,
}

impl AsyncFileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a whole file as UTF-8.
    /// Without fail_fast, errors are reported in the stats and `None` is returned.
    pub async fn read_file<P: AsRef<Path>>(&self, file_path: P) -> Result<(Option<String>, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of file: {}", path.display());

        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                let stats = ReadStats {
                    file_path: path.display().to_string(),
                    bytes_read: content.len() as u64,
                    duration_ms: start_time.elapsed().as_millis() as u64,
                    read_error: None,
                };
                info!("Read {}: {} bytes in {}ms", path.display(), stats.bytes_read, stats.duration_ms);
                Ok((Some(content), stats))
            }
            Err(e) => {
                let error_msg = format!("Failed to read file {}: {}", path.display(), e);
                warn!("{}", error_msg);

                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error_msg));
                }

                let stats = ReadStats {
                    file_path: path.display().to_string(),
                    bytes_read: 0,
                    duration_ms: start_time.elapsed().as_millis() as u64,
                    read_error: Some(error_msg),
                };
                Ok((None, stats))
            }
        }
    }
}

/// Read all of stdin as UTF-8
pub async fn read_stdin() -> Result<String> {
    let mut content = String::new();
    tokio::io::stdin()
        .read_to_string(&mut content)
        .await
        .context("Failed to read stdin as UTF-8")?;
    debug!("Read {} bytes from stdin", content.len());
    Ok(content)
}
