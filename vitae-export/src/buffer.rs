//! The [`BufferGenerator`] contract and the identity HTML strategy.

use async_trait::async_trait;

use crate::error::ExportError;

/// Converts rendered HTML into the bytes of one output file.
#[async_trait]
pub trait BufferGenerator: Send + Sync {
    async fn convert(&self, html: &str) -> Result<Vec<u8>, ExportError>;
}

/// Writes the HTML unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlBuffer;

#[async_trait]
impl BufferGenerator for HtmlBuffer {
    async fn convert(&self, html: &str) -> Result<Vec<u8>, ExportError> {
        Ok(html.as_bytes().to_vec())
    }
}
