use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{GenerateError, GenerateResult};

/* Result of comparing a rendered module with the file on disk */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    UpToDate,
    Stale,
    Missing,
}

/* Persist a rendered module, replacing any previous content. Parent directories are not created. */
pub fn write_module(path: &Path, content: &str) -> GenerateResult<()> {
    fs::write(path, content.as_bytes()).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/* Compare a rendered module with what is currently on disk */
pub fn check_module(path: &Path, content: &str) -> GenerateResult<CheckStatus> {
    match fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => Ok(CheckStatus::UpToDate),
        Ok(_) => Ok(CheckStatus::Stale),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(CheckStatus::Missing),
        Err(source) => Err(GenerateError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}
