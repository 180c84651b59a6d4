//! `vitae validate <file>`

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use vitae_core::loader;

/// Check a résumé against the jsonresume schema.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the jsonresume document.
    pub file: PathBuf,
}

impl ValidateArgs {
    pub fn run(self) -> Result<()> {
        let report = loader::validate(&self.file)?;
        let path = report.into_result()?;
        println!(
            "{} {} is a valid jsonresume document",
            "✓".green(),
            path.display()
        );
        Ok(())
    }
}
