pub mod analyzer;
pub mod cache;
pub mod config;
pub mod detectors;
pub mod discovery;
pub mod error;
pub mod markup;
pub mod reader;
pub mod report;
pub mod scorers;
pub mod statistics;
pub mod suggestions;
pub mod tokenizer;

// Re-export the analysis entry points
pub use analyzer::{analyze_text, AnalysisOptions, Analyzer, ReadabilityScores, ShowVsTell};
pub use cache::AnalysisCache;
pub use config::AnalyzerConfig;
pub use detectors::{Detector, Finding, FindingKind};
pub use error::{ConfigError, InsufficientInputError};
pub use scorers::ReadingLevel;
pub use statistics::{ManuscriptEstimate, TextStatistics};
pub use tokenizer::{Sentence, TokenizedText};
