//! Error types for analysis and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Returned when the plain text is too short, or has no words, to produce meaningful scores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "insufficient text for analysis: {length} characters and {words} words, \
     need at least {min_length} characters and one word"
)]
pub struct InsufficientInputError {
    /// Characters in the normalized plain text
    pub length: usize,
    /// Words found in the normalized plain text
    pub words: usize,
    /// Configured minimum
    pub min_length: usize,
}

/// Errors raised while loading configuration or building an analyzer.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {message}")]
    Invalid { message: String },

    #[error("failed to compile {detector} pattern: {source}")]
    Pattern {
        detector: &'static str,
        #[source]
        source: Box<regex_automata::meta::BuildError>,
    },
}

impl ConfigError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    pub(crate) fn pattern(detector: &'static str, source: regex_automata::meta::BuildError) -> Self {
        Self::Pattern {
            detector,
            source: Box::new(source),
        }
    }
}
