use anyhow::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for file reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for one file read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

/// Async manuscript reader
pub struct AsyncFileReader {
    config: ReaderConfig,
}

impl AsyncFileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a whole file as UTF-8
    ///
    /// Without `fail_fast`, open and decoding errors are recorded in the
    /// returned stats alongside empty content.
    pub async fn read_file<P: AsRef<Path>>(&self, file_path: P) -> Result<(String, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();
        debug!("Starting async read of file: {}", path.display());

        let outcome = match File::open(path).await {
            Ok(file) => {
                let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
                let mut content = String::new();
                reader
                    .read_to_string(&mut content)
                    .await
                    .map(|_| content)
                    .map_err(|e| format!("Failed to read {} as UTF-8: {}", path.display(), e))
            }
            Err(e) => Err(format!("Failed to open file {}: {}", path.display(), e)),
        };

        let duration_ms = start_time.elapsed().as_millis() as u64;

        match outcome {
            Ok(content) => {
                let stats = ReadStats {
                    file_path: path.display().to_string(),
                    bytes_read: content.len() as u64,
                    duration_ms,
                    read_error: None,
                };
                info!("Read {}: {} bytes in {}ms", path.display(), stats.bytes_read, duration_ms);
                Ok((content, stats))
            }
            Err(error_msg) => {
                warn!("{}", error_msg);
                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error_msg));
                }
                let stats = ReadStats {
                    file_path: path.display().to_string(),
                    bytes_read: 0,
                    duration_ms,
                    read_error: Some(error_msg),
                };
                Ok((String::new(), stats))
            }
        }
    }
}

/// Read a single file with the default configuration, failing on any error
pub async fn read_file_async<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let reader = AsyncFileReader::new(ReaderConfig {
        fail_fast: true,
        ..ReaderConfig::default()
    });
    let (content, _stats) = reader.read_file(file_path).await?;
    Ok(content)
}
