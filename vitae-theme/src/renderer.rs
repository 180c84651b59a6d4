//! The [`ThemeRenderer`] capability and the [`generate`] entry point.

use async_trait::async_trait;

use vitae_core::ResumeDocument;

use crate::error::ThemeError;
use crate::registry::ThemeRegistry;

/// Something that turns a résumé into an HTML document.
///
/// Template themes finish synchronously and external themes finish later;
/// both are driven through this one async contract.
#[async_trait]
pub trait ThemeRenderer: Send + Sync {
    /// Name the theme was registered or resolved under.
    fn name(&self) -> &str;

    async fn render(&self, resume: &ResumeDocument) -> Result<String, ThemeError>;
}

/// Resolve `identifier` against `themes` and render `resume` with it.
pub async fn generate(
    themes: &ThemeRegistry,
    identifier: &str,
    resume: &ResumeDocument,
) -> Result<String, ThemeError> {
    let theme = themes.resolve(identifier)?;
    tracing::debug!(identifier, theme = theme.name(), "rendering resume html");
    let html = theme.render(resume).await?;
    tracing::debug!(theme = theme.name(), bytes = html.len(), "theme rendered");
    Ok(html)
}
