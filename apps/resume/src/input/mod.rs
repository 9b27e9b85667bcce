//! Loading a résumé description from JSON into a [`Document`].
//!
//! Flow: read file → parse → validate (warn, or fail when strict) → escape (optional).

pub mod validation;

use std::path::Path;

use tracing::{info, warn};

use crate::document::Document;
use crate::errors::ResumeError;
use crate::latex::EscapeText;

pub use validation::{validate_document, ValidationIssue, ValidationReport};

/// How [`load_document`] treats the parsed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Escape LaTeX specials in every user string before returning.
    pub escape_latex: bool,
    /// Turn validation issues into an error instead of warnings.
    pub strict: bool,
}

/// Parses a JSON résumé description. No validation or escaping is applied.
pub fn parse_document(json: &str) -> Result<Document, ResumeError> {
    Ok(serde_json::from_str(json)?)
}

/// Reads, parses, validates and optionally escapes a résumé description.
pub fn load_document(path: &Path, options: &LoadOptions) -> Result<Document, ResumeError> {
    let json = std::fs::read_to_string(path).map_err(|source| ResumeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse_document(&json)?;
    info!(
        "Loaded {} element(s) from {}",
        document.elements().len(),
        path.display()
    );

    let report = validate_document(&document);
    if !report.passed {
        if options.strict {
            return Err(ResumeError::Validation {
                count: report.issues.len(),
                summary: report.summary(),
            });
        }
        for issue in &report.issues {
            warn!("{}: {}", issue.path, issue.reason);
        }
    }

    Ok(if options.escape_latex {
        document.escape_text()
    } else {
        document
    })
}
