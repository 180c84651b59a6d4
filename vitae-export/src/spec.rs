//! [`RenderSpec`]: a render mode paired with its buffer generator.

use std::fmt;
use std::sync::Arc;

use vitae_core::{ModeError, RenderMode};

use crate::buffer::{BufferGenerator, HtmlBuffer};
use crate::pdf::{PdfBuffer, PdfOptions};

/// Settings for the generators created by [`RenderSpec::resolve_all`].
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    pub pdf: PdfOptions,
}

/// One requested output: which mode, and how its bytes are produced.
#[derive(Clone)]
pub struct RenderSpec {
    mode: RenderMode,
    generator: Arc<dyn BufferGenerator>,
}

impl RenderSpec {
    pub fn new(mode: RenderMode, generator: Arc<dyn BufferGenerator>) -> Self {
        RenderSpec { mode, generator }
    }

    /// The standard generator for `mode`.
    pub fn for_mode(mode: RenderMode, config: &ExportConfig) -> Self {
        let generator: Arc<dyn BufferGenerator> = match mode {
            RenderMode::Html => Arc::new(HtmlBuffer),
            RenderMode::Pdf => Arc::new(PdfBuffer::new(config.pdf.clone())),
        };
        RenderSpec::new(mode, generator)
    }

    /// Map mode tokens to specs, preserving order and duplicates.
    ///
    /// Tokens are matched case-insensitively; the first unknown token fails
    /// the whole call.
    pub fn resolve_all<S: AsRef<str>>(
        tokens: &[S],
        config: &ExportConfig,
    ) -> Result<Vec<RenderSpec>, ModeError> {
        tokens
            .iter()
            .map(|token| {
                let mode: RenderMode = token.as_ref().parse()?;
                Ok(RenderSpec::for_mode(mode, config))
            })
            .collect()
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn generator(&self) -> &dyn BufferGenerator {
        self.generator.as_ref()
    }
}

impl fmt::Debug for RenderSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderSpec")
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
