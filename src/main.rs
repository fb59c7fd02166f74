use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tokio::io::AsyncReadExt;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use authorify_readability::discovery::{self, DiscoveryConfig};
use authorify_readability::reader::{AsyncFileReader, ReaderConfig};
use authorify_readability::report::{self, FileReport, FileStats, FileStatus, RunStats};
use authorify_readability::{AnalysisOptions, Analyzer, AnalyzerConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "readability")]
#[command(about = "Readability scores and prose heuristics for manuscripts")]
#[command(version)]
struct Args {
    /// Files or directories to analyze (reads stdin if none provided)
    paths: Vec<PathBuf>,

    /// TOML file overriding thresholds and lexicons
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum plain-text characters required for analysis
    #[arg(long)]
    min_length: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// File-name glob used inside directories (repeatable)
    #[arg(long = "pattern")]
    patterns: Vec<String>,

    /// Run statistics output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,

    /// Abort on first unreadable file
    #[arg(long)]
    fail_fast: bool,

    /// Suppress console progress bar
    #[arg(long)]
    no_progress: bool,

    /// Concurrent analyses (defaults to CPU count)
    #[arg(long)]
    jobs: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: stdout carries results; structured logs go to stderr
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .json()
        .init();

    let args = Args::parse();
    info!(?args, "Parsed CLI arguments");

    let config = match &args.config {
        Some(path) => AnalyzerConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };
    let analyzer = Arc::new(Analyzer::new(config).context("Failed to build analyzer")?);
    let options = AnalysisOptions {
        min_length: args.min_length,
    };

    if args.paths.is_empty() {
        return analyze_stdin(&analyzer, &options, args.format).await;
    }

    let run_start = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or(0);
    let started = Instant::now();

    let discovery_config = DiscoveryConfig {
        fail_fast: args.fail_fast,
        patterns: if args.patterns.is_empty() {
            DiscoveryConfig::default().patterns
        } else {
            args.patterns.clone()
        },
    };
    let discovered = discovery::collect_manuscripts(&args.paths, &discovery_config).await?;

    let progress = if args.no_progress {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(discovered.len() as u64);
        bar.set_style(ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")?.progress_chars("=> "));
        bar
    };

    let reader = Arc::new(AsyncFileReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        ..ReaderConfig::default()
    }));
    let jobs = args.jobs.unwrap_or_else(num_cpus::get).max(1);

    let outcomes: Vec<Result<(FileReport, FileStats)>> = stream::iter(discovered)
        .map(|file| {
            let analyzer = Arc::clone(&analyzer);
            let reader = Arc::clone(&reader);
            let progress = progress.clone();
            async move {
                let outcome = process_file(file, &reader, analyzer, options).await;
                progress.inc(1);
                outcome
            }
        })
        .buffer_unordered(jobs)
        .collect()
        .await;
    progress.finish_and_clear();

    let mut reports = Vec::with_capacity(outcomes.len());
    let mut run_stats = RunStats::new(run_start);
    for outcome in outcomes {
        let (file_report, file_stats) = outcome?;
        reports.push(file_report);
        run_stats.record(file_stats);
    }
    reports.sort_by(|a, b| a.path.cmp(&b.path));
    run_stats.file_stats.sort_by(|a, b| a.path.cmp(&b.path));
    run_stats.total_processing_time_ms = started.elapsed().as_millis() as u64;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
        OutputFormat::Text => {
            for file_report in &reports {
                match (&file_report.scores, &file_report.error) {
                    (Some(scores), _) => print!("{}", report::render_text(&file_report.path, scores)),
                    (None, Some(error)) => println!("{}\n  skipped: {error}", file_report.path),
                    (None, None) => println!("{}", file_report.path),
                }
            }
        }
    }

    info!(
        analyzed = run_stats.files_analyzed,
        insufficient = run_stats.files_insufficient,
        failed = run_stats.files_failed,
        words = run_stats.total_words,
        "Run complete"
    );

    if let Some(stats_out) = &args.stats_out {
        run_stats
            .write(stats_out)
            .await
            .with_context(|| format!("Failed to write stats to {}", stats_out.display()))?;
    }

    Ok(())
}

async fn process_file(
    file: discovery::FileValidation,
    reader: &AsyncFileReader,
    analyzer: Arc<Analyzer>,
    options: AnalysisOptions,
) -> Result<(FileReport, FileStats)> {
    let path = file.path.display().to_string();
    let started = Instant::now();

    if let Some(error) = file.error {
        return Ok(failed(path, error));
    }

    let (content, read_stats) = reader.read_file(&file.path).await?;
    if let Some(error) = read_stats.read_error {
        return Ok(failed(path, error));
    }

    // WHY: scoring is CPU-bound; run it off the async workers
    let result = tokio::task::spawn_blocking(move || analyzer.analyze(&content, &options))
        .await
        .context("Analysis task failed")?;
    let processing_time_ms = started.elapsed().as_millis() as u64;

    let outcome = match result {
        Ok(scores) => {
            let stats = FileStats {
                path: path.clone(),
                bytes_read: read_stats.bytes_read,
                words: scores.stats.word_count as u64,
                sentences: scores.stats.sentence_count as u64,
                processing_time_ms,
                status: FileStatus::Analyzed,
                error: None,
            };
            let file_report = FileReport {
                path,
                status: FileStatus::Analyzed,
                scores: Some(scores),
                error: None,
            };
            (file_report, stats)
        }
        Err(insufficient) => {
            warn!("Skipping {}: {}", path, insufficient);
            let stats = FileStats {
                path: path.clone(),
                bytes_read: read_stats.bytes_read,
                words: 0,
                sentences: 0,
                processing_time_ms,
                status: FileStatus::Insufficient,
                error: Some(insufficient.to_string()),
            };
            let file_report = FileReport {
                path,
                status: FileStatus::Insufficient,
                scores: None,
                error: Some(insufficient.to_string()),
            };
            (file_report, stats)
        }
    };

    Ok(outcome)
}

fn failed(path: String, error: String) -> (FileReport, FileStats) {
    let stats = FileStats {
        path: path.clone(),
        bytes_read: 0,
        words: 0,
        sentences: 0,
        processing_time_ms: 0,
        status: FileStatus::Failed,
        error: Some(error.clone()),
    };
    let file_report = FileReport {
        path,
        status: FileStatus::Failed,
        scores: None,
        error: Some(error),
    };
    (file_report, stats)
}

async fn analyze_stdin(analyzer: &Analyzer, options: &AnalysisOptions, format: OutputFormat) -> Result<()> {
    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("Failed to read stdin")?;

    let scores = analyzer.analyze(&input, options)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&scores)?),
        OutputFormat::Text => print!("{}", report::render_text("<stdin>", &scores)),
    }
    Ok(())
}
