//! Miette diagnostic wrapper for plural data errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use istring::plural::LoadError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for unreadable plural data.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid plural data: {message}")]
#[diagnostic(code(istring::plural_data))]
pub struct PluralDataDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl PluralDataDiagnostic {
    /// Create a diagnostic from a load error with source context.
    pub fn from_load_error(path: &Path, content: &str, err: &LoadError) -> Self {
        let (line, column, message) = match err {
            LoadError::Json { source } => (source.line(), source.column(), source.to_string()),
            LoadError::Io { .. } => (1, 1, err.to_string()),
        };

        // serde_json columns are 1-based, except 0 at the start of a line.
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + column.saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        let help = message
            .contains("unknown variant")
            .then(|| "categories are zero, one, two, few and many".to_string());

        PluralDataDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message,
            help,
        }
    }

    /// The error message without source context.
    pub fn message(&self) -> &str {
        &self.message
    }
}
