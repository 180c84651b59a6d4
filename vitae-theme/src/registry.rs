//! Theme registry and identifier resolution.
//!
//! # Resolution order
//!
//! 1. a theme registered under the exact identifier;
//! 2. a registered theme named like the identifier minus `jsonresume-theme-`;
//! 3. a directory holding `resume.html.tera`, or a single `*.tera` file;
//! 4. an executable file path, or a bare program name found on `PATH`
//!    as given or as `jsonresume-theme-<name>`.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::command::CommandTheme;
use crate::error::{io_err, ThemeError};
use crate::renderer::ThemeRenderer;
use crate::template::{TemplateTheme, ENTRY_TEMPLATE};

/// Conventional package prefix of jsonresume themes.
pub const THEME_PREFIX: &str = "jsonresume-theme-";

/// Where a theme came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    /// Compiled into the binary.
    Builtin,
    /// A directory of Tera templates.
    Directory(PathBuf),
    /// A single Tera template file.
    File(PathBuf),
    /// An external program.
    Command(PathBuf),
    /// Registered programmatically.
    Custom,
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeSource::Builtin => f.write_str("built-in"),
            ThemeSource::Directory(p) => write!(f, "directory {}", p.display()),
            ThemeSource::File(p) => write!(f, "template {}", p.display()),
            ThemeSource::Command(p) => write!(f, "command {}", p.display()),
            ThemeSource::Custom => f.write_str("custom"),
        }
    }
}

/// A registered theme.
#[derive(Clone)]
pub struct ThemeEntry {
    pub name: String,
    pub source: ThemeSource,
    pub renderer: Arc<dyn ThemeRenderer>,
}

impl fmt::Debug for ThemeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeEntry")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

/// Named themes available to a render, plus on-demand path/program lookup.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: BTreeMap<String, ThemeEntry>,
}

impl ThemeRegistry {
    /// A registry with nothing registered; only paths and programs resolve.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry holding every built-in theme.
    pub fn with_builtins() -> Result<Self, ThemeError> {
        let mut registry = Self::empty();
        for name in TemplateTheme::builtin_names() {
            let theme = TemplateTheme::builtin(name)?;
            registry.register(name, ThemeSource::Builtin, Arc::new(theme));
        }
        Ok(registry)
    }

    /// Register every sub-directory of `dir` that holds [`ENTRY_TEMPLATE`],
    /// under the sub-directory's name. Replaces same-named themes.
    ///
    /// The first theme that fails to compile fails the whole call.
    pub fn with_themes_dir(mut self, dir: &Path) -> Result<Self, ThemeError> {
        for (name, path) in theme_dirs(dir)? {
            let theme = TemplateTheme::from_dir(&name, &path)?;
            self.register_dir_theme(name, path, theme);
        }
        Ok(self)
    }

    /// Like [`with_themes_dir`](Self::with_themes_dir), but an unreadable
    /// directory or a theme that fails to compile is logged and skipped.
    pub fn with_default_themes_dir(mut self, dir: &Path) -> Self {
        let found = match theme_dirs(dir) {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping themes directory");
                return self;
            }
        };
        for (name, path) in found {
            match TemplateTheme::from_dir(&name, &path) {
                Ok(theme) => self.register_dir_theme(name, path, theme),
                Err(e) => {
                    tracing::warn!(theme = %name, path = %path.display(), error = %e, "skipping broken theme");
                }
            }
        }
        self
    }

    fn register_dir_theme(&mut self, name: String, path: PathBuf, theme: TemplateTheme) {
        tracing::debug!(theme = %name, path = %path.display(), "registered directory theme");
        self.register(name, ThemeSource::Directory(path), Arc::new(theme));
    }

    /// Register `renderer` under `name`, replacing any previous entry.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        source: ThemeSource,
        renderer: Arc<dyn ThemeRenderer>,
    ) {
        let name = name.into();
        self.themes.insert(
            name.clone(),
            ThemeEntry {
                name,
                source,
                renderer,
            },
        );
    }

    /// Registered themes in name order.
    pub fn entries(&self) -> impl Iterator<Item = &ThemeEntry> {
        self.themes.values()
    }

    pub fn names(&self) -> Vec<String> {
        self.themes.keys().cloned().collect()
    }

    /// Resolve `identifier` to a renderer (see module docs for the order).
    pub fn resolve(&self, identifier: &str) -> Result<Arc<dyn ThemeRenderer>, ThemeError> {
        if let Some(entry) = self.lookup(identifier) {
            tracing::debug!(identifier, source = %entry.source, "resolved registered theme");
            return Ok(Arc::clone(&entry.renderer));
        }

        let path = Path::new(identifier);
        if path.is_dir() {
            tracing::debug!(identifier, "resolved directory theme");
            return Ok(Arc::new(TemplateTheme::from_dir(identifier, path)?));
        }
        if path.is_file() {
            if path.extension().and_then(|s| s.to_str()) == Some("tera") {
                tracing::debug!(identifier, "resolved template file theme");
                return Ok(Arc::new(TemplateTheme::from_file(identifier, path)?));
            }
            if is_executable(path) {
                tracing::debug!(identifier, "resolved command theme");
                return Ok(Arc::new(CommandTheme::new(identifier, path)));
            }
        }
        if let Some(program) = find_on_path(identifier) {
            tracing::debug!(identifier, program = %program.display(), "resolved command theme on PATH");
            return Ok(Arc::new(CommandTheme::new(identifier, program)));
        }

        Err(ThemeError::NotFound {
            identifier: identifier.to_string(),
            available: self.names(),
        })
    }

    fn lookup(&self, identifier: &str) -> Option<&ThemeEntry> {
        self.themes.get(identifier).or_else(|| {
            identifier
                .strip_prefix(THEME_PREFIX)
                .and_then(|short| self.themes.get(short))
        })
    }
}

/// `(name, path)` of every sub-directory of `dir` holding [`ENTRY_TEMPLATE`],
/// sorted by path.
fn theme_dirs(dir: &Path) -> Result<Vec<(String, PathBuf)>, ThemeError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    let mut found = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        if !(path.is_dir() && path.join(ENTRY_TEMPLATE).is_file()) {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            found.push((name.to_string(), path.clone()));
        }
    }
    found.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(found)
}

// ---------------------------------------------------------------------------
// Program lookup
// ---------------------------------------------------------------------------

/// `program` on `PATH`, falling back to `jsonresume-theme-<program>`.
fn find_on_path(program: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    find_in_paths(program, &paths)
}

fn find_in_paths(program: &str, paths: &OsStr) -> Option<PathBuf> {
    if program.is_empty() || program.contains(['/', '\\']) {
        return None;
    }
    let lookup = |name: &str| {
        std::env::split_paths(paths)
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file() && is_executable(candidate))
    };
    lookup(program).or_else(|| {
        if program.starts_with(THEME_PREFIX) {
            None
        } else {
            lookup(&format!("{THEME_PREFIX}{program}"))
        }
    })
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "exe" | "bat" | "cmd"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn builtins_are_registered() {
        let registry = ThemeRegistry::with_builtins().unwrap();
        assert_eq!(registry.names(), vec!["classic".to_string(), "flat".to_string()]);
        assert!(registry
            .entries()
            .all(|e| e.source == ThemeSource::Builtin));
    }

    #[test]
    fn prefixed_identifier_resolves_to_short_name() {
        let registry = ThemeRegistry::with_builtins().unwrap();
        let theme = registry.resolve("jsonresume-theme-flat").unwrap();
        assert_eq!(theme.name(), "flat");
        assert_eq!(registry.resolve("classic").unwrap().name(), "classic");
    }

    #[test]
    fn unknown_identifier_lists_available_themes() {
        let registry = ThemeRegistry::with_builtins().unwrap();
        let err = registry
            .resolve("jsonresume-theme-definitely-not-installed-xyz")
            .err()
            .unwrap();
        match &err {
            ThemeError::NotFound { available, .. } => {
                assert_eq!(available, &vec!["classic".to_string(), "flat".to_string()]);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
        assert_eq!(err.kind(), vitae_core::ErrorKind::ThemeLoad);
    }

    #[test]
    fn themes_dir_registers_and_overrides() {
        let dir = TempDir::new().unwrap();
        for name in ["flat", "midnight"] {
            let theme_dir = dir.path().join(name);
            std::fs::create_dir_all(&theme_dir).unwrap();
            std::fs::write(theme_dir.join(ENTRY_TEMPLATE), format!("{name} theme")).unwrap();
        }
        std::fs::create_dir_all(dir.path().join("not-a-theme")).unwrap();

        let registry = ThemeRegistry::with_builtins()
            .unwrap()
            .with_themes_dir(dir.path())
            .unwrap();
        assert_eq!(
            registry.names(),
            vec!["classic".to_string(), "flat".to_string(), "midnight".to_string()]
        );
        let flat = registry.entries().find(|e| e.name == "flat").unwrap();
        assert_eq!(flat.source, ThemeSource::Directory(dir.path().join("flat")));
    }

    #[test]
    fn directory_path_resolves_without_registration() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(ENTRY_TEMPLATE), "hello").unwrap();
        let identifier = dir.path().to_string_lossy().to_string();

        let theme = ThemeRegistry::empty().resolve(&identifier).unwrap();
        assert_eq!(theme.name(), identifier);
    }

    #[test]
    fn template_file_path_resolves() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("one.tera");
        std::fs::write(&file, "x").unwrap();
        let theme = ThemeRegistry::empty()
            .resolve(&file.to_string_lossy())
            .unwrap();
        assert!(theme.name().ends_with("one.tera"));
    }

    #[test]
    fn path_lookup_ignores_paths_with_separators() {
        assert_eq!(find_on_path("some/dir/prog"), None);
        assert_eq!(find_on_path(""), None);
    }

    fn write_theme(root: &Path, name: &str, entry: &str) {
        let theme_dir = root.join(name);
        std::fs::create_dir_all(&theme_dir).unwrap();
        std::fs::write(theme_dir.join(ENTRY_TEMPLATE), entry).unwrap();
    }

    #[test]
    fn broken_theme_fails_explicit_dir() {
        let dir = TempDir::new().unwrap();
        write_theme(dir.path(), "broken", "{% if %}");

        let err = ThemeRegistry::with_builtins()
            .unwrap()
            .with_themes_dir(dir.path())
            .unwrap_err();
        assert!(matches!(err, ThemeError::Load { .. }), "got {err:?}");
    }

    #[test]
    fn default_dir_skips_broken_theme() {
        let dir = TempDir::new().unwrap();
        write_theme(dir.path(), "broken", "{% if %}");
        write_theme(dir.path(), "midnight", "<p>{{ basics.name }}</p>");

        let registry = ThemeRegistry::with_builtins()
            .unwrap()
            .with_default_themes_dir(dir.path());
        assert_eq!(
            registry.names(),
            vec!["classic".to_string(), "flat".to_string(), "midnight".to_string()]
        );
    }

    #[test]
    fn default_dir_missing_keeps_builtins() {
        let dir = TempDir::new().unwrap();
        let registry = ThemeRegistry::with_builtins()
            .unwrap()
            .with_default_themes_dir(&dir.path().join("absent"));
        assert_eq!(registry.names(), vec!["classic".to_string(), "flat".to_string()]);
    }

    #[cfg(unix)]
    fn install_program(dir: &Path, name: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let program = dir.join(name);
        std::fs::write(&program, "#!/bin/sh\ncat\n").unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();
        program
    }

    #[cfg(unix)]
    #[test]
    fn path_lookup_adds_theme_prefix() {
        let bin = TempDir::new().unwrap();
        let program = install_program(bin.path(), "jsonresume-theme-even");

        let paths = bin.path().as_os_str();
        assert_eq!(find_in_paths("even", paths), Some(program.clone()));
        assert_eq!(find_in_paths("jsonresume-theme-even", paths), Some(program));
        assert_eq!(find_in_paths("odd", paths), None);
    }

    #[cfg(unix)]
    #[test]
    fn path_lookup_prefers_exact_name() {
        let bin = TempDir::new().unwrap();
        let exact = install_program(bin.path(), "even");
        install_program(bin.path(), "jsonresume-theme-even");

        assert_eq!(find_in_paths("even", bin.path().as_os_str()), Some(exact));
    }

    #[cfg(unix)]
    #[test]
    fn executable_file_resolves_to_command_theme() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let script = dir.path().join("render-theme");
        std::fs::write(&script, "#!/bin/sh\ncat >/dev/null\necho '<p>cmd</p>'\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let theme = ThemeRegistry::empty()
            .resolve(&script.to_string_lossy())
            .unwrap();
        assert!(theme.name().ends_with("render-theme"));
    }
}
