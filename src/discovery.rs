use anyhow::{Context, Result};
use glob::Pattern;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

/// File-name patterns analyzed when a directory is given
pub const DEFAULT_PATTERNS: &[&str] = &["*.txt", "*.md", "*.markdown", "*.html", "*.htm"];

/// Configuration for manuscript discovery
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Whether to fail fast on first inaccessible path or continue
    pub fail_fast: bool,
    /// Glob patterns matched against file names inside directories
    pub patterns: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Result of discovering one candidate file
#[derive(Debug, Clone, PartialEq)]
pub struct FileValidation {
    pub path: PathBuf,
    pub error: Option<String>,
}

/// Expand files and directories into the manuscripts to analyze
///
/// Explicitly named files are always included; directories are walked
/// recursively and filtered by `config.patterns`. Results are sorted by path.
pub async fn collect_manuscripts(inputs: &[PathBuf], config: &DiscoveryConfig) -> Result<Vec<FileValidation>> {
    let patterns = compile_patterns(&config.patterns)?;
    let mut files = Vec::new();

    for input in inputs {
        match fs::metadata(input).await {
            Ok(metadata) if metadata.is_dir() => {
                info!("Walking directory: {}", input.display());
                let found = walk_directory(input.clone(), patterns.clone()).await?;
                debug!("Found {} matching files under {}", found.len(), input.display());
                files.extend(found.into_iter().map(|path| FileValidation { path, error: None }));
            }
            Ok(_) => files.push(FileValidation {
                path: input.clone(),
                error: None,
            }),
            Err(e) => {
                let error = format!("Cannot access {}: {}", input.display(), e);
                warn!("{}", error);
                if config.fail_fast {
                    anyhow::bail!(error);
                }
                files.push(FileValidation {
                    path: input.clone(),
                    error: Some(error),
                });
            }
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    files.dedup_by(|a, b| a.path == b.path);

    let invalid = files.iter().filter(|f| f.error.is_some()).count();
    info!(
        "Discovery summary: {} files, {} valid, {} with issues",
        files.len(),
        files.len() - invalid,
        invalid
    );

    Ok(files)
}

/// Only the valid paths, for callers that do not report discovery issues
pub async fn find_manuscripts(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let files = collect_manuscripts(inputs, &DiscoveryConfig::default()).await?;
    Ok(files.into_iter().filter(|f| f.error.is_none()).map(|f| f.path).collect())
}

pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid file pattern: {p}")))
        .collect()
}

async fn walk_directory(root: PathBuf, patterns: Vec<Pattern>) -> Result<Vec<PathBuf>> {
    // WHY: ignore's walker is blocking; keep it off the async executor
    tokio::task::spawn_blocking(move || {
        let walker = WalkBuilder::new(&root)
            .follow_links(false)
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .build();

        let mut found = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Directory traversal error (continuing): {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            if matches_any(entry.path(), &patterns) {
                found.push(entry.into_path());
            }
        }
        found
    })
    .await
    .context("Directory walker task failed")
}

fn matches_any(path: &Path, patterns: &[Pattern]) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| patterns.iter().any(|p| p.matches(name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
        let file_path = dir.join(name);
        if let Some(parent) = file_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&file_path, content).await?;
        Ok(file_path)
    }

    #[tokio::test]
    async fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let files = collect_manuscripts(&[temp_dir.path().to_path_buf()], &DiscoveryConfig::default())
            .await
            .unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_directory_filtered_by_pattern() {
        let temp_dir = TempDir::new().unwrap();
        create_test_file(temp_dir.path(), "chapter1.txt", "Once upon a time.").await.unwrap();
        create_test_file(temp_dir.path(), "drafts/chapter2.md", "It was dark.").await.unwrap();
        create_test_file(temp_dir.path(), "cover.png", "not text").await.unwrap();

        let files = find_manuscripts(&[temp_dir.path().to_path_buf()]).await.unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"chapter1.txt".to_string()));
        assert!(names.contains(&"chapter2.md".to_string()));
    }

    #[tokio::test]
    async fn test_explicit_file_bypasses_patterns() {
        let temp_dir = TempDir::new().unwrap();
        let path = create_test_file(temp_dir.path(), "notes.rtf", "Plain enough.").await.unwrap();

        let files = find_manuscripts(&[path.clone(), path.clone()]).await.unwrap();
        assert_eq!(files, vec![path]);
    }

    #[tokio::test]
    async fn test_missing_path_reported_or_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let files = collect_manuscripts(&[missing.clone()], &DiscoveryConfig::default()).await.unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].error.is_some());

        let config = DiscoveryConfig {
            fail_fast: true,
            ..DiscoveryConfig::default()
        };
        assert!(collect_manuscripts(&[missing], &config).await.is_err());
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        assert!(compile_patterns(&["[".to_string()]).is_err());
    }
}
