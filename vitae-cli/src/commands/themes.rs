//! `vitae themes`: list registered themes.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tabled::{settings::Style, Table, Tabled};

/// List the themes available to `render`.
#[derive(Args, Debug)]
pub struct ThemesArgs {
    /// Extra directory of Tera themes, one sub-directory per theme.
    #[arg(long, env = "VITAE_THEMES_DIR")]
    pub themes_dir: Option<PathBuf>,
}

#[derive(Tabled)]
struct ThemeRow {
    #[tabled(rename = "theme")]
    name: String,
    #[tabled(rename = "source")]
    source: String,
}

impl ThemesArgs {
    pub fn run(self) -> Result<()> {
        let registry = super::build_registry(self.themes_dir.as_deref())?;
        let rows: Vec<ThemeRow> = registry
            .entries()
            .map(|entry| ThemeRow {
                name: entry.name.clone(),
                source: entry.source.to_string(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!("Executables named jsonresume-theme-<name> on PATH are also accepted.");
        Ok(())
    }
}
