use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading a catalog from disk.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not shaped like the catalog it should hold.
    #[error("catalog '{}' is malformed: {source}", path.display())]
    Shape {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },
}

impl CatalogError {
    /// Path of the catalog file involved in the failure.
    pub fn path(&self) -> &PathBuf {
        match self {
            CatalogError::Io { path, .. } | CatalogError::Shape { path, .. } => path,
        }
    }
}
