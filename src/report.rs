// WHY: run-level statistics for the CLI, written as JSON alongside per-file results

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::analyzer::ReadabilityScores;

/// Outcome of one file
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    Analyzed,
    Insufficient,
    Failed,
}

/// Per-file result printed by the CLI
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileReport {
    pub path: String,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ReadabilityScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Per-file processing statistics
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileStats {
    pub path: String,
    pub bytes_read: u64,
    pub words: u64,
    pub sentences: u64,
    pub processing_time_ms: u64,
    pub status: FileStatus,
    pub error: Option<String>,
}

/// Aggregate statistics for one CLI run
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RunStats {
    /// Unix seconds at run start
    pub run_start: u64,
    pub total_processing_time_ms: u64,
    pub files_analyzed: u64,
    pub files_insufficient: u64,
    pub files_failed: u64,
    pub total_words: u64,
    pub total_sentences: u64,
    pub file_stats: Vec<FileStats>,
}

impl RunStats {
    pub fn new(run_start: u64) -> Self {
        Self {
            run_start,
            ..Self::default()
        }
    }

    pub fn record(&mut self, stats: FileStats) {
        match stats.status {
            FileStatus::Analyzed => self.files_analyzed += 1,
            FileStatus::Insufficient => self.files_insufficient += 1,
            FileStatus::Failed => self.files_failed += 1,
        }
        self.total_words += stats.words;
        self.total_sentences += stats.sentences;
        self.file_stats.push(stats);
    }

    /// Write as pretty JSON, creating parent directories
    pub async fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let file = tokio::fs::File::create(path).await?;
        let mut writer = BufWriter::new(file);
        writer.write_all(serde_json::to_string_pretty(self)?.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
        Ok(())
    }
}

/// Plain-text summary of one analysis
pub fn render_text(path: &str, scores: &ReadabilityScores) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{path}");
    let _ = writeln!(
        out,
        "  words: {}  sentences: {}  syllables: {}  pages: {}  reading time: {:.1} min",
        scores.stats.word_count,
        scores.stats.sentence_count,
        scores.stats.syllable_count,
        scores.estimate.pages,
        scores.estimate.reading_minutes
    );
    let _ = writeln!(
        out,
        "  flesch reading ease: {:.1} ({})  flesch-kincaid: {:.1}  gunning fog: {:.1}  coleman-liau: {:.1}",
        scores.flesch_reading,
        scores.reading_level.label(),
        scores.flesch_kincaid,
        scores.gunning_fog,
        scores.coleman_liau
    );
    let _ = writeln!(out, "  show vs tell: {:.2}", scores.show_vs_tell.ratio);
    for suggestion in &scores.suggestions {
        let _ = writeln!(out, "  - {suggestion}");
    }
    out
}
