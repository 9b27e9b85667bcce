use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while getting a résumé description into memory.
///
/// Rendering itself cannot fail; these only cover reading and checking input.
#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid resume JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation failed with {count} issue(s): {summary}")]
    Validation { count: usize, summary: String },
}
