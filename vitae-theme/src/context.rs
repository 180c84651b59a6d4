//! Template context: serializable rendering payload built from a [`ResumeDocument`].

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use vitae_core::ResumeDocument;

use crate::error::ThemeError;

/// Sections every template may iterate without guarding for presence.
const LIST_SECTIONS: &[&str] = &[
    "work",
    "volunteer",
    "education",
    "awards",
    "certificates",
    "publications",
    "skills",
    "languages",
    "interests",
    "references",
    "projects",
];

/// Rendering payload.
///
/// Every top-level résumé key is exposed directly (`basics`, `work`, ...),
/// with absent list sections defaulted to `[]` and `basics` to `{}`. The
/// untouched document is also available as `resume`, and generator details
/// as `vitae`.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeContext {
    #[serde(flatten)]
    pub sections: Map<String, Value>,
    pub resume: Value,
    pub vitae: GeneratorCtx,
}

/// Generator details.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorCtx {
    /// `vitae <version>`.
    pub generator: String,
    /// RFC 3339 UTC timestamp.
    pub generated_at: String,
}

impl ThemeContext {
    /// Build a [`ThemeContext`] stamped with the current time.
    pub fn from_resume(resume: &ResumeDocument) -> Self {
        Self::from_resume_at(resume, Utc::now())
    }

    pub fn from_resume_at(resume: &ResumeDocument, now: DateTime<Utc>) -> Self {
        let mut sections = resume.sections().clone();
        sections
            .entry("basics")
            .or_insert_with(|| Value::Object(Map::new()));
        for name in LIST_SECTIONS {
            sections
                .entry(*name)
                .or_insert_with(|| Value::Array(Vec::new()));
        }
        // Reserved names win over résumé keys of the same name.
        sections.remove("resume");
        sections.remove("vitae");

        ThemeContext {
            sections,
            resume: resume.to_value(),
            vitae: GeneratorCtx {
                generator: format!("vitae {}", env!("CARGO_PKG_VERSION")),
                generated_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            },
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, ThemeError> {
        tera::Context::from_serialize(self).map_err(ThemeError::from)
    }
}
