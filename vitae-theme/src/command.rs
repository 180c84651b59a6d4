//! Command themes: an external program renders the résumé.
//!
//! Protocol: the résumé JSON is written to the program's stdin, stdin is
//! closed, and everything the program prints to stdout is the HTML. A
//! non-zero exit status is a render failure carrying the program's stderr.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use vitae_core::ResumeDocument;

use crate::error::ThemeError;
use crate::renderer::ThemeRenderer;

/// A theme backed by an executable.
#[derive(Debug, Clone)]
pub struct CommandTheme {
    name: String,
    program: PathBuf,
    args: Vec<String>,
}

impl CommandTheme {
    pub fn new(name: impl Into<String>, program: impl Into<PathBuf>) -> Self {
        CommandTheme {
            name: name.into(),
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Extra arguments passed to the program before the résumé is piped in.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn spawn_err(&self, source: std::io::Error) -> ThemeError {
        ThemeError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

#[async_trait]
impl ThemeRenderer for CommandTheme {
    fn name(&self) -> &str {
        &self.name
    }

    async fn render(&self, resume: &ResumeDocument) -> Result<String, ThemeError> {
        let payload = serde_json::to_vec(resume)?;

        tracing::debug!(program = %self.program.display(), "spawning theme program");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| self.spawn_err(e))?;

        let mut stdin = child.stdin.take().ok_or_else(|| ThemeError::Render {
            theme: self.name.clone(),
            message: "stdin of theme program was not captured".to_string(),
        })?;

        // Feed stdin concurrently with draining stdout/stderr.
        let feed = async move {
            let result = stdin.write_all(&payload).await;
            drop(stdin);
            match result {
                // The program may exit without reading its input.
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
                other => other,
            }
        };
        let (fed, output) = tokio::join!(feed, child.wait_with_output());
        let output = output.map_err(|e| self.spawn_err(e))?;

        if !output.status.success() {
            return Err(ThemeError::Command {
                theme: self.name.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        fed.map_err(|e| self.spawn_err(e))?;

        String::from_utf8(output.stdout).map_err(|e| ThemeError::Render {
            theme: self.name.clone(),
            message: format!("output is not UTF-8: {e}"),
        })
    }
}
