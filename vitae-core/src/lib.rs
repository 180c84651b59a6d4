//! vitae core library: résumé document, render modes, loader, errors.
//!
//! Public API surface:
//! - [`types`]: [`ResumeDocument`] and [`RenderMode`]
//! - [`error`]: [`LoadError`], [`ModeError`] and the [`ErrorKind`] exit-code map
//! - [`schema`]: the embedded jsonresume schema and its validator
//! - [`loader`]: read / parse / validate a résumé file

pub mod error;
pub mod loader;
pub mod schema;
pub mod types;

pub use error::{ErrorKind, LoadError, ModeError};
pub use schema::{SchemaValidator, ValidationReport, Violation};
pub use types::{RenderMode, ResumeDocument};

/// A complete jsonresume document used by `vitae init` and in tests.
pub const SAMPLE_RESUME: &str = include_str!("sample/resume.json");
