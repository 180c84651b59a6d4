//! # vitae-pipeline
//!
//! Render orchestration: load → generate HTML once → one buffer per
//! requested mode → write `<name>.<mode>`.
//!
//! Call [`render_resume`] with a [`RenderRequest`] and a
//! [`ThemeRegistry`](vitae_theme::ThemeRegistry).

pub mod error;
pub mod orchestrator;
pub mod writer;

pub use error::PipelineError;
pub use orchestrator::{default_output_name, render_resume, RenderReport, RenderRequest, RenderedOutput};
