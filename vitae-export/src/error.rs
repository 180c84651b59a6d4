//! Error types for vitae-export.

use thiserror::Error;
use vitae_core::ErrorKind;

/// All errors that can arise while producing an output buffer.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Chromium could not be configured or started.
    #[error("failed to launch headless browser: {0}")]
    Launch(String),

    /// Loading the page or printing it failed.
    #[error("headless browser error: {0}")]
    Browser(String),

    /// The blocking browser task panicked or was cancelled.
    #[error("browser task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    /// The HTML could not be encoded into the page script.
    #[error("failed to encode page content: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ExportError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Browser
    }
}

/// headless_chrome reports failures as `anyhow::Error`; keep the full chain.
pub(crate) fn browser_err(err: impl std::fmt::Display) -> ExportError {
    ExportError::Browser(format!("{err:#}"))
}
