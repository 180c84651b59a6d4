pub mod init;
pub mod render;
pub mod themes;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use vitae_theme::ThemeRegistry;

/// `<config dir>/vitae/themes`, if the platform has a config dir.
fn default_themes_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("vitae").join("themes"))
}

/// Built-in themes plus every theme under `themes_dir`.
///
/// An explicit directory must load cleanly. Without one, the default
/// directory is scanned if it exists, and themes that fail to load there are
/// skipped with a warning.
pub(crate) fn build_registry(themes_dir: Option<&Path>) -> Result<ThemeRegistry> {
    let registry = ThemeRegistry::with_builtins().context("failed to load built-in themes")?;

    match themes_dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "scanning themes directory");
            registry
                .with_themes_dir(dir)
                .with_context(|| format!("failed to load themes from '{}'", dir.display()))
        }
        None => match default_themes_dir() {
            Some(dir) if dir.is_dir() => {
                tracing::debug!(dir = %dir.display(), "scanning default themes directory");
                Ok(registry.with_default_themes_dir(&dir))
            }
            _ => Ok(registry),
        },
    }
}
