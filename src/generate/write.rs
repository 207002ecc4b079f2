//! Writes generated files to disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::{GenerateResult, OutputContents};

/// Write every file of `result` below `output_dir`, creating directories as
/// needed. Returns the written paths.
///
/// Stops at the first failure; files written before it are left in place.
pub fn write_result(result: &GenerateResult, output_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let output_dir = output_dir.as_ref();
    let mut written = Vec::with_capacity(result.files.len());

    for file in &result.files {
        let path = output_dir.join(&file.path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| Error::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        match &file.contents {
            OutputContents::Text(text) => fs::write(&path, text),
            OutputContents::Copy(source) => fs::copy(source, &path).map(|_| ()),
        }
        .map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        log::info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
