//! Domain types shared by every vitae crate.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ModeError;

// ---------------------------------------------------------------------------
// ResumeDocument
// ---------------------------------------------------------------------------

/// A parsed résumé that has passed jsonresume schema validation.
///
/// Only [`crate::loader`] constructs this type, so holding one implies the
/// underlying JSON is an object that satisfies the schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResumeDocument(Map<String, Value>);

impl ResumeDocument {
    pub(crate) fn from_object(object: Map<String, Value>) -> Self {
        Self(object)
    }

    /// Top-level sections keyed by name (`basics`, `work`, ...).
    pub fn sections(&self) -> &Map<String, Value> {
        &self.0
    }

    /// A single top-level section, if present.
    pub fn section(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// `basics.name`, when the résumé provides one.
    pub fn basics_name(&self) -> Option<&str> {
        self.0.get("basics")?.get("name")?.as_str()
    }

    /// Clone the document into a generic JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

// ---------------------------------------------------------------------------
// RenderMode
// ---------------------------------------------------------------------------

/// Output formats vitae can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    Html,
    Pdf,
}

impl RenderMode {
    /// All modes in a stable order.
    pub fn all() -> &'static [RenderMode] {
        &[RenderMode::Html, RenderMode::Pdf]
    }

    /// File extension of the output, also the canonical token.
    pub fn extension(self) -> &'static str {
        match self {
            RenderMode::Html => "html",
            RenderMode::Pdf => "pdf",
        }
    }

    /// Uppercase label used in status messages.
    pub fn label(self) -> &'static str {
        match self {
            RenderMode::Html => "HTML",
            RenderMode::Pdf => "PDF",
        }
    }
}

impl FromStr for RenderMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(RenderMode::Html),
            "pdf" => Ok(RenderMode::Pdf),
            _ => Err(ModeError::Unsupported {
                token: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
