//! Embedded jsonresume schema and the validator built from it.

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::LoadError;

const JSONRESUME_SCHEMA: &str = include_str!("schema/resume.schema.json");

/// One schema violation: where it happened and what was wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON pointer into the résumé (`/basics/email`); `/` for the root.
    pub pointer: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.pointer, self.message)
    }
}

/// Outcome of validating a file without failing on violations.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub path: PathBuf,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Convert into a [`LoadError::Validation`] when violations exist.
    pub fn into_result(self) -> Result<PathBuf, LoadError> {
        if self.is_valid() {
            Ok(self.path)
        } else {
            Err(LoadError::Validation {
                path: self.path,
                violations: self.violations,
            })
        }
    }
}

/// Compiled jsonresume schema.
pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    /// Compile the embedded jsonresume schema.
    pub fn jsonresume() -> Result<Self, LoadError> {
        let schema: Value = serde_json::from_str(JSONRESUME_SCHEMA)
            .map_err(|e| LoadError::Schema(e.to_string()))?;
        let validator =
            jsonschema::validator_for(&schema).map_err(|e| LoadError::Schema(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Every violation of the schema found in `instance`, in report order.
    pub fn violations(&self, instance: &Value) -> Vec<Violation> {
        self.validator
            .iter_errors(instance)
            .map(|error| {
                let pointer = error.instance_path.to_string();
                Violation {
                    pointer: if pointer.is_empty() {
                        "/".to_string()
                    } else {
                        pointer
                    },
                    message: error.to_string(),
                }
            })
            .collect()
    }

    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }
}
