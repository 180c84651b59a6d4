//! Tera-backed themes: built-in, directory and single-file.
//!
//! # Template layout
//!
//! | Name                            | Source                                  |
//! |---------------------------------|-----------------------------------------|
//! | `resume.html.tera`              | the theme's entry template              |
//! | `shared/basics.html.tera`       | header, contact details, summary        |
//! | `shared/experience.html.tera`   | work, projects, volunteer               |
//! | `shared/education.html.tera`    | education, certificates, awards, publications |
//! | `shared/skills.html.tera`       | skills, languages, interests, references |
//!
//! Shared partials are available to every template theme, so a directory
//! theme can `{% include "shared/skills.html.tera" %}` or override a partial
//! by shipping a file with the same relative name.
//!
//! Directory themes name each template by its path relative to the theme
//! directory, using `/` separators and the file's own case:
//! `partials/Header.html.tera` is included as `"partials/Header.html.tera"`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tera::Tera;

use vitae_core::ResumeDocument;

use crate::context::ThemeContext;
use crate::error::{io_err, ThemeError};
use crate::renderer::ThemeRenderer;

/// Name of the template every template theme renders.
pub const ENTRY_TEMPLATE: &str = "resume.html.tera";

// ---------------------------------------------------------------------------
// Embedded templates
// ---------------------------------------------------------------------------

const PARTIALS: &[(&str, &str)] = &[
    (
        "shared/basics.html.tera",
        include_str!("templates/_partials/basics.html.tera"),
    ),
    (
        "shared/experience.html.tera",
        include_str!("templates/_partials/experience.html.tera"),
    ),
    (
        "shared/education.html.tera",
        include_str!("templates/_partials/education.html.tera"),
    ),
    (
        "shared/skills.html.tera",
        include_str!("templates/_partials/skills.html.tera"),
    ),
];

const BUILTINS: &[(&str, &str)] = &[
    ("flat", include_str!("templates/flat.html.tera")),
    ("classic", include_str!("templates/classic.html.tera")),
];

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

/// Relative path with `/` separators; case is kept.
fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), ThemeError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_dir_templates(dir: &Path) -> Result<Vec<(String, String)>, ThemeError> {
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(theme: &str, overrides: Vec<(String, String)>) -> Result<Tera, ThemeError> {
    let mut templates: HashMap<String, String> = PARTIALS
        .iter()
        .map(|(name, content)| (name.to_string(), content.to_string()))
        .collect();
    templates.extend(overrides);

    let mut tera = Tera::default();
    tera.autoescape_on(vec![".html.tera", ".html", ".htm"]);
    tera.add_raw_templates(templates)
        .map_err(|source| ThemeError::Load {
            theme: theme.to_string(),
            source,
        })?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateTheme
// ---------------------------------------------------------------------------

/// A theme rendered by Tera from [`ENTRY_TEMPLATE`] plus shared partials.
pub struct TemplateTheme {
    name: String,
    tera: Tera,
}

impl TemplateTheme {
    /// Names of the themes compiled into the binary.
    pub fn builtin_names() -> impl Iterator<Item = &'static str> {
        BUILTINS.iter().map(|(name, _)| *name)
    }

    /// Load a built-in theme by name.
    pub fn builtin(name: &str) -> Result<Self, ThemeError> {
        let (_, entry) = BUILTINS
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .ok_or_else(|| ThemeError::NotFound {
                identifier: name.to_string(),
                available: Self::builtin_names().map(str::to_string).collect(),
            })?;
        Self::from_templates(name, vec![(ENTRY_TEMPLATE.to_string(), entry.to_string())])
    }

    /// Load every `*.tera` file below `dir`. The directory must contain
    /// [`ENTRY_TEMPLATE`] at its root.
    pub fn from_dir(name: &str, dir: &Path) -> Result<Self, ThemeError> {
        let templates = load_dir_templates(dir)?;
        if !templates.iter().any(|(n, _)| n == ENTRY_TEMPLATE) {
            return Err(ThemeError::MissingEntry {
                path: dir.to_path_buf(),
                entry: ENTRY_TEMPLATE,
            });
        }
        Self::from_templates(name, templates)
    }

    /// Use a single template file as the entry template.
    pub fn from_file(name: &str, file: &Path) -> Result<Self, ThemeError> {
        let contents = std::fs::read_to_string(file).map_err(|e| io_err(file, e))?;
        Self::from_templates(name, vec![(ENTRY_TEMPLATE.to_string(), contents)])
    }

    /// Build from raw `(name, content)` pairs; one must be [`ENTRY_TEMPLATE`].
    pub fn from_templates(
        name: &str,
        templates: Vec<(String, String)>,
    ) -> Result<Self, ThemeError> {
        let tera = build_tera(name, templates)?;
        if !tera.get_template_names().any(|n| n == ENTRY_TEMPLATE) {
            return Err(ThemeError::MissingEntry {
                path: PathBuf::from(name),
                entry: ENTRY_TEMPLATE,
            });
        }
        Ok(TemplateTheme {
            name: name.to_string(),
            tera,
        })
    }

    /// Render synchronously with a prepared context.
    pub fn render_context(&self, ctx: &ThemeContext) -> Result<String, ThemeError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(ENTRY_TEMPLATE, &tera_ctx)?)
    }
}

#[async_trait]
impl ThemeRenderer for TemplateTheme {
    fn name(&self) -> &str {
        &self.name
    }

    async fn render(&self, resume: &ResumeDocument) -> Result<String, ThemeError> {
        self.render_context(&ThemeContext::from_resume(resume))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
