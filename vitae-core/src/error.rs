//! Error types for vitae-core, plus the process-wide [`ErrorKind`] taxonomy.

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::Violation;

// ---------------------------------------------------------------------------
// ErrorKind
// ---------------------------------------------------------------------------

/// Coarse classification shared by every vitae error type.
///
/// Each kind maps to a distinct process exit code (see [`ErrorKind::exit_code`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The résumé does not satisfy the jsonresume schema.
    Validation,
    /// The résumé file is not well-formed JSON.
    Parse,
    /// The requested theme could not be located or loaded.
    ThemeLoad,
    /// The theme failed while producing HTML.
    Render,
    /// A requested render mode is not one of `html`, `pdf`.
    UnsupportedMode,
    /// Headless browser launch or page printing failed.
    Browser,
    /// Filesystem read or write failure.
    Io,
    /// Anything else.
    Other,
}

impl ErrorKind {
    /// Exit code reported by the `vitae` binary for this kind.
    ///
    /// `2` is left to clap for usage errors.
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Other => 1,
            ErrorKind::Validation => 3,
            ErrorKind::Parse => 4,
            ErrorKind::ThemeLoad => 5,
            ErrorKind::Render => 6,
            ErrorKind::UnsupportedMode => 7,
            ErrorKind::Browser => 8,
            ErrorKind::Io => 9,
        }
    }
}

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// All errors that can arise while loading a résumé file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON does not satisfy the jsonresume schema.
    #[error(
        "{} is not a valid resume.json file by the jsonresume schema{}",
        .path.display(),
        format_violations(.violations)
    )]
    Validation {
        path: PathBuf,
        violations: Vec<Violation>,
    },

    /// The embedded schema failed to compile.
    #[error("embedded jsonresume schema is unusable: {0}")]
    Schema(String),
}

impl LoadError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LoadError::Io { .. } => ErrorKind::Io,
            LoadError::Parse { .. } => ErrorKind::Parse,
            LoadError::Validation { .. } => ErrorKind::Validation,
            LoadError::Schema(_) => ErrorKind::Other,
        }
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("\n  {v}"))
        .collect()
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.into(),
        source,
    }
}

// ---------------------------------------------------------------------------
// ModeError
// ---------------------------------------------------------------------------

/// Raised while turning user-supplied mode tokens into [`crate::RenderMode`]s.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("unsupported render mode '{token}'; expected: html, pdf")]
    Unsupported { token: String },
}

impl ModeError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::UnsupportedMode
    }
}
