//! # vitae-theme
//!
//! Theme resolution and HTML generation for résumé documents.
//!
//! A theme is anything implementing [`ThemeRenderer`]. Three kinds ship here:
//!
//! - built-in Tera themes compiled into the binary (`flat`, `classic`),
//! - directory themes: a folder holding `resume.html.tera` plus partials,
//! - command themes: an executable that reads résumé JSON on stdin and
//!   writes HTML to stdout.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use vitae_theme::{generate, ThemeRegistry};
//!
//! async fn to_html() -> Result<String, Box<dyn std::error::Error>> {
//!     let resume = vitae_core::loader::load(Path::new("resume.json"))?;
//!     let themes = ThemeRegistry::with_builtins()?;
//!     Ok(generate(&themes, "jsonresume-theme-flat", &resume).await?)
//! }
//! ```

pub mod command;
pub mod context;
pub mod error;
pub mod registry;
pub mod renderer;
pub mod template;

pub use command::CommandTheme;
pub use context::ThemeContext;
pub use error::ThemeError;
pub use registry::{ThemeEntry, ThemeRegistry, ThemeSource};
pub use renderer::{generate, ThemeRenderer};
pub use template::TemplateTheme;
