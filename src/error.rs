use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while running a pipeline topic.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid page request: page {page}, size {page_size} (both must be at least 1)")]
    InvalidPage { page: usize, page_size: usize },

    #[error("Unknown salary band '{0}' (expected Low, Medium or High)")]
    UnknownSalaryBand(String),

    #[error("Unknown topic '{name}'{}", suggestion_suffix(.suggestion))]
    UnknownTopic {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("Array length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid value for field '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(", did you mean '{name}'?"),
        None => String::new(),
    }
}

impl PipelineError {
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_topic_display_with_suggestion() {
        let error = PipelineError::UnknownTopic {
            name: "filtr".into(),
            suggestion: Some("filter".into()),
        };
        assert_eq!(
            error.to_string(),
            "Unknown topic 'filtr', did you mean 'filter'?"
        );
    }

    #[test]
    fn test_unknown_topic_display_without_suggestion() {
        let error = PipelineError::UnknownTopic {
            name: "zzz".into(),
            suggestion: None,
        };
        assert_eq!(error.to_string(), "Unknown topic 'zzz'");
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let error: PipelineError = io_err.into();
        assert!(matches!(error, PipelineError::Output(_)));
        assert!(error.to_string().contains("closed"));
    }

    #[test]
    fn test_invalid_page_display() {
        let error = PipelineError::InvalidPage { page: 0, page_size: 3 };
        assert!(error.to_string().contains("page 0"));
    }
}
