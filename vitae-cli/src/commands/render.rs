//! `vitae render <file> <theme> [-o <name>] [-r <mode>...]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use vitae_export::{BrowserConfig, ExportConfig, PdfOptions, RenderSpec};
use vitae_pipeline::{render_resume, RenderRequest};

/// Render a résumé through a theme and write one file per mode.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the jsonresume document.
    pub file: PathBuf,

    /// Theme name (`flat`, `jsonresume-theme-flat`), template directory or
    /// file, or theme executable.
    pub theme: String,

    /// Output base name; defaults to the input file name without extension.
    #[arg(long, short = 'o', value_name = "NAME")]
    pub output_name: Option<String>,

    /// Output modes, in order: html, pdf.
    #[arg(long, short = 'r', value_name = "MODE", num_args = 1..)]
    pub render: Vec<String>,

    /// Directory outputs are written to (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Extra directory of Tera themes.
    #[arg(long, env = "VITAE_THEMES_DIR")]
    pub themes_dir: Option<PathBuf>,

    /// Chromium or Chrome executable used for PDF output.
    #[arg(long, env = "VITAE_BROWSER", value_name = "PATH")]
    pub browser: Option<PathBuf>,

    /// Launch the browser without its sandbox.
    #[arg(long)]
    pub no_sandbox: bool,
}

impl RenderArgs {
    fn export_config(&self) -> ExportConfig {
        ExportConfig {
            pdf: PdfOptions {
                browser: BrowserConfig {
                    executable: self.browser.clone(),
                    sandbox: !self.no_sandbox,
                    ..BrowserConfig::default()
                },
                ..PdfOptions::default()
            },
        }
    }

    pub async fn run(self) -> Result<()> {
        // Modes first: a bad token must fail before anything is read.
        let specs = RenderSpec::resolve_all(&self.render, &self.export_config())?;
        if specs.is_empty() {
            println!(
                "{} no render modes requested; pass -r html and/or -r pdf to write output",
                "!".yellow()
            );
        }

        let themes = super::build_registry(self.themes_dir.as_deref())?;
        let request = RenderRequest::new(&self.file, self.theme, specs)
            .with_output_name(self.output_name)
            .with_out_dir(self.out_dir);

        let report = render_resume(&request, &themes)
            .await
            .with_context(|| format!("failed to render '{}'", request.resume_path.display()))?;

        for status in report.statuses() {
            println!("{} {status}", "✓".green());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(browser: Option<&str>, no_sandbox: bool) -> RenderArgs {
        RenderArgs {
            file: PathBuf::from("resume.json"),
            theme: "flat".into(),
            output_name: None,
            render: vec![],
            out_dir: None,
            themes_dir: None,
            browser: browser.map(PathBuf::from),
            no_sandbox,
        }
    }

    #[test]
    fn browser_flags_reach_export_config() {
        let config = args(Some("/opt/chromium"), true).export_config();
        assert_eq!(
            config.pdf.browser.executable,
            Some(PathBuf::from("/opt/chromium"))
        );
        assert!(!config.pdf.browser.sandbox);
        assert_eq!(config.pdf.margins, PdfOptions::default().margins);
    }

    #[test]
    fn sandbox_is_on_by_default() {
        let config = args(None, false).export_config();
        assert!(config.pdf.browser.sandbox);
        assert_eq!(config.pdf.browser.executable, None);
    }
}
