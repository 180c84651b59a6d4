//! Error types for vitae-theme.

use std::path::PathBuf;

use thiserror::Error;
use vitae_core::ErrorKind;

/// All errors that can arise while resolving a theme or rendering with it.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// No registered theme, template path or executable matches the identifier.
    #[error("theme '{identifier}' not found; available: {}", .available.join(", "))]
    NotFound {
        identifier: String,
        available: Vec<String>,
    },

    /// A theme directory has no entry template.
    #[error("theme at {path} has no {entry} template")]
    MissingEntry { path: PathBuf, entry: &'static str },

    /// Templates failed to compile while loading a theme.
    #[error("failed to load theme '{theme}': {source}")]
    Load {
        theme: String,
        #[source]
        source: tera::Error,
    },

    /// Filesystem error while loading theme templates.
    #[error("theme io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tera failed while rendering.
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    /// JSON serialization error (building the template context or the command payload).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A command theme could not be started or waited on.
    #[error("failed to run theme program {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A command theme exited unsuccessfully.
    #[error("theme '{theme}' exited with {status}: {stderr}")]
    Command {
        theme: String,
        status: String,
        stderr: String,
    },

    /// Any other failure while producing HTML.
    #[error("theme '{theme}' failed to render: {message}")]
    Render { theme: String, message: String },
}

impl ThemeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ThemeError::NotFound { .. }
            | ThemeError::MissingEntry { .. }
            | ThemeError::Load { .. }
            | ThemeError::Io { .. }
            | ThemeError::Spawn { .. } => ErrorKind::ThemeLoad,
            ThemeError::Template(_)
            | ThemeError::Serialization(_)
            | ThemeError::Command { .. }
            | ThemeError::Render { .. } => ErrorKind::Render,
        }
    }
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ThemeError {
    ThemeError::Io {
        path: path.into(),
        source,
    }
}
