//! Render orchestration.
//!
//! Linear, short-circuiting sequence:
//!
//! 1. load and validate the résumé;
//! 2. resolve the theme and render HTML exactly once;
//! 3. for each [`RenderSpec`] in caller order: convert, write, record status.
//!
//! A failure at any step returns immediately. Outputs already written stay
//! on disk.

use std::fmt;
use std::path::{Path, PathBuf};

use vitae_core::{loader, RenderMode};
use vitae_export::RenderSpec;
use vitae_theme::{generate, ThemeRegistry};

use crate::error::PipelineError;
use crate::writer;

/// Output base name used when the input path has no usable file stem.
const FALLBACK_OUTPUT_NAME: &str = "resume";

/// The input file's name without directory or final extension.
pub fn default_output_name(resume_path: &Path) -> String {
    resume_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_OUTPUT_NAME.to_string())
}

// ---------------------------------------------------------------------------
// Request / report
// ---------------------------------------------------------------------------

/// Everything one render run needs.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub resume_path: PathBuf,
    pub theme: String,
    pub output_name: String,
    pub out_dir: Option<PathBuf>,
    pub specs: Vec<RenderSpec>,
}

impl RenderRequest {
    /// A request writing `<input stem>.<mode>` into the working directory.
    pub fn new(
        resume_path: impl Into<PathBuf>,
        theme: impl Into<String>,
        specs: Vec<RenderSpec>,
    ) -> Self {
        let resume_path = resume_path.into();
        let output_name = default_output_name(&resume_path);
        RenderRequest {
            resume_path,
            theme: theme.into(),
            output_name,
            out_dir: None,
            specs,
        }
    }

    /// Override the output base name.
    ///
    /// `None`, an empty or blank name, `.` and `..` keep the default.
    pub fn with_output_name(mut self, name: Option<String>) -> Self {
        if let Some(name) = name.filter(|n| !matches!(n.trim(), "" | "." | "..")) {
            self.output_name = name;
        }
        self
    }

    pub fn with_out_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.out_dir = dir;
        self
    }
}

/// One file written by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub mode: RenderMode,
    pub path: PathBuf,
}

impl RenderedOutput {
    /// `"<MODE> file written to <path>"`.
    pub fn status(&self) -> String {
        format!("{} file written to {}", self.mode.label(), self.path.display())
    }
}

/// Outcome of a successful run, one entry per requested spec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub outputs: Vec<RenderedOutput>,
}

impl RenderReport {
    pub fn statuses(&self) -> Vec<String> {
        self.outputs.iter().map(RenderedOutput::status).collect()
    }

    /// All status strings joined with `", "`.
    pub fn message(&self) -> String {
        self.statuses().join(", ")
    }
}

impl fmt::Display for RenderReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

// ---------------------------------------------------------------------------
// render_resume
// ---------------------------------------------------------------------------

/// Run one render: load, generate once, write one file per spec.
pub async fn render_resume(
    request: &RenderRequest,
    themes: &ThemeRegistry,
) -> Result<RenderReport, PipelineError> {
    let resume = loader::load(&request.resume_path)?;
    tracing::debug!(
        path = %request.resume_path.display(),
        name = resume.basics_name().unwrap_or("<unnamed>"),
        "resume loaded"
    );

    let html = generate(themes, &request.theme, &resume).await?;

    let mut outputs = Vec::with_capacity(request.specs.len());
    for spec in &request.specs {
        let mode = spec.mode();
        let bytes = spec.generator().convert(&html).await?;
        let path = writer::output_path(request.out_dir.as_deref(), &request.output_name, mode);
        writer::write_output(&path, &bytes)?;
        tracing::info!(mode = %mode, bytes = bytes.len(), path = %path.display(), "output written");
        outputs.push(RenderedOutput { mode, path });
    }

    Ok(RenderReport { outputs })
}
