//! Output writer.
//!
//! ## `write_output`
//!
//! 1. Create the parent directory if needed.
//! 2. Write the bytes to `<path>.vitae.tmp`.
//! 3. Rename over the final path; on failure remove the temp file.
//!
//! Files written earlier in a run are never touched by a later failure.

use std::path::{Path, PathBuf};

use vitae_core::RenderMode;

use crate::error::{io_err, PipelineError};

/// `<out_dir>/<name>.<ext>`, or `<name>.<ext>` relative to the working
/// directory when `out_dir` is `None`.
pub fn output_path(out_dir: Option<&Path>, output_name: &str, mode: RenderMode) -> PathBuf {
    let file_name = format!("{output_name}.{}", mode.extension());
    match out_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Write `bytes` to `path` through a sibling temp file.
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), PipelineError> {
    let tmp = PathBuf::from(format!("{}.vitae.tmp", path.display()));
    write_with_tmp(path, bytes, &tmp)
}

fn write_with_tmp(path: &Path, bytes: &[u8], tmp: &Path) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }

    std::fs::write(tmp, bytes).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "renamed into place");
    Ok(())
}
