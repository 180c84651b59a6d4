//! vitae: render jsonresume documents to HTML and PDF.
//!
//! # Usage
//!
//! ```text
//! vitae validate <file>
//! vitae render <file> <theme> [-o <name>] [-r html pdf] [--out-dir <dir>]
//!              [--themes-dir <dir>] [--browser <path>] [--no-sandbox]
//! vitae init [file]
//! vitae themes [--themes-dir <dir>]
//! ```

mod commands;

use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;

use commands::{init::InitArgs, render::RenderArgs, themes::ThemesArgs, validate::ValidateArgs};
use vitae_core::{ErrorKind, LoadError, ModeError};
use vitae_export::ExportError;
use vitae_pipeline::PipelineError;
use vitae_theme::ThemeError;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "vitae",
    version,
    about = "Render a jsonresume document through a theme into HTML or PDF",
    long_about = None,
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a résumé against the jsonresume schema.
    Validate(ValidateArgs),

    /// Render a résumé through a theme and write one file per mode.
    Render(RenderArgs),

    /// Write a sample résumé to start from.
    Init(InitArgs),

    /// List the themes available to `render`.
    Themes(ThemesArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Validate(args) => args.run(),
        Commands::Render(args) => args.run().await,
        Commands::Init(args) => args.run(),
        Commands::Themes(args) => args.run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(error_kind(&err).exit_code())
        }
    }
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// First classified error in the chain; `Other` when none is.
fn error_kind(err: &anyhow::Error) -> ErrorKind {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<PipelineError>() {
            return e.kind();
        }
        if let Some(e) = cause.downcast_ref::<LoadError>() {
            return e.kind();
        }
        if let Some(e) = cause.downcast_ref::<ThemeError>() {
            return e.kind();
        }
        if let Some(e) = cause.downcast_ref::<ExportError>() {
            return e.kind();
        }
        if let Some(e) = cause.downcast_ref::<ModeError>() {
            return e.kind();
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return ErrorKind::Io;
        }
    }
    ErrorKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn kind_is_found_beneath_context() {
        let err = Err::<(), _>(ModeError::Unsupported {
            token: "docx".into(),
        })
        .context("resolving render modes")
        .unwrap_err();
        assert_eq!(error_kind(&err), ErrorKind::UnsupportedMode);
    }

    #[test]
    fn plain_io_error_maps_to_io() {
        let err = anyhow::Error::new(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            "exists",
        ));
        assert_eq!(error_kind(&err), ErrorKind::Io);
    }

    #[test]
    fn unclassified_error_is_other() {
        assert_eq!(error_kind(&anyhow::anyhow!("boom")), ErrorKind::Other);
    }

    #[test]
    fn verbose_flag_counts() {
        let cli = Cli::try_parse_from(["vitae", "-vv", "themes"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
