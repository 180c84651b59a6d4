//! Résumé loader: read → parse → validate.
//!
//! The same path is used for every step, and the file is read exactly once.
//! A document that fails the schema never becomes a [`ResumeDocument`].

use std::path::Path;

use serde_json::Value;

use crate::error::{io_err, LoadError};
use crate::schema::{SchemaValidator, ValidationReport};
use crate::types::ResumeDocument;

/// Load and validate the résumé at `path`.
pub fn load(path: &Path) -> Result<ResumeDocument, LoadError> {
    let validator = SchemaValidator::jsonresume()?;
    load_with(&validator, path)
}

/// Like [`load`], reusing an already compiled validator.
pub fn load_with(validator: &SchemaValidator, path: &Path) -> Result<ResumeDocument, LoadError> {
    tracing::debug!(path = %path.display(), "loading resume");
    let source = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    parse_with(validator, &source, path)
}

/// Parse and validate résumé JSON held in memory.
///
/// `origin` is only used to label errors.
pub fn parse_str(source: &str, origin: &Path) -> Result<ResumeDocument, LoadError> {
    let validator = SchemaValidator::jsonresume()?;
    parse_with(&validator, source, origin)
}

/// Run schema validation on the file at `path` and report every violation.
///
/// Unlike [`load`], violations are returned in the report instead of as an
/// error; read and parse failures are still errors.
pub fn validate(path: &Path) -> Result<ValidationReport, LoadError> {
    let validator = SchemaValidator::jsonresume()?;
    let source = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let value = parse_json(&source, path)?;
    Ok(ValidationReport {
        path: path.to_path_buf(),
        violations: validator.violations(&value),
    })
}

fn parse_with(
    validator: &SchemaValidator,
    source: &str,
    origin: &Path,
) -> Result<ResumeDocument, LoadError> {
    let value = parse_json(source, origin)?;
    let violations = validator.violations(&value);
    if !violations.is_empty() {
        tracing::debug!(
            path = %origin.display(),
            count = violations.len(),
            "resume failed schema validation"
        );
        return Err(LoadError::Validation {
            path: origin.to_path_buf(),
            violations,
        });
    }
    match value {
        Value::Object(object) => Ok(ResumeDocument::from_object(object)),
        // The schema pins the root to an object.
        other => Err(LoadError::Validation {
            path: origin.to_path_buf(),
            violations: vec![crate::schema::Violation {
                pointer: "/".to_string(),
                message: format!("{other} is not of type \"object\""),
            }],
        }),
    }
}

fn parse_json(source: &str, origin: &Path) -> Result<Value, LoadError> {
    serde_json::from_str(source).map_err(|source| LoadError::Parse {
        path: origin.to_path_buf(),
        source,
    })
}
