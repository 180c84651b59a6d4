//! `vitae init [file]`

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use vitae_core::SAMPLE_RESUME;

/// Write a sample résumé to start from.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the sample. Never overwritten.
    #[arg(default_value = "resume.json")]
    pub file: PathBuf,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.file)
            .with_context(|| format!("cannot create '{}'", self.file.display()))?;
        file.write_all(SAMPLE_RESUME.as_bytes())
            .with_context(|| format!("cannot write '{}'", self.file.display()))?;

        println!("{} Wrote sample resume to {}", "✓".green(), self.file.display());
        println!(
            "  Next: vitae render {} flat -r html pdf",
            self.file.display()
        );
        Ok(())
    }
}
