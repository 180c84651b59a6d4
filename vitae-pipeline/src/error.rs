//! Error types for vitae-pipeline.

use std::path::PathBuf;

use thiserror::Error;

use vitae_core::{ErrorKind, LoadError};
use vitae_export::ExportError;
use vitae_theme::ThemeError;

/// All errors that can arise from a render run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The résumé could not be read, parsed or validated.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The theme could not be resolved or failed to render.
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// An output buffer could not be produced.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// An output file could not be written.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PipelineError::Load(e) => e.kind(),
            PipelineError::Theme(e) => e.kind(),
            PipelineError::Export(e) => e.kind(),
            PipelineError::Io { .. } => ErrorKind::Io,
        }
    }
}

/// Convenience constructor for [`PipelineError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PipelineError {
    PipelineError::Io {
        path: path.into(),
        source,
    }
}
