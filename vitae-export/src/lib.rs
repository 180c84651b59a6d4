//! # vitae-export
//!
//! Buffer generators: turn rendered HTML into the bytes written for each
//! [`RenderMode`](vitae_core::RenderMode).
//!
//! - [`HtmlBuffer`]: the HTML itself, UTF-8 encoded.
//! - [`PdfBuffer`]: an A4 PDF printed by a fresh headless Chromium.
//!
//! [`RenderSpec::resolve_all`] maps user-supplied mode tokens to generators.

pub mod buffer;
pub mod error;
pub mod pdf;
pub mod spec;

pub use buffer::{BufferGenerator, HtmlBuffer};
pub use error::ExportError;
pub use pdf::{BrowserConfig, Margins, PdfBuffer, PdfOptions};
pub use spec::{ExportConfig, RenderSpec};
