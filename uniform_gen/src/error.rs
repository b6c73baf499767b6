use std::path::PathBuf;
use thiserror::Error;
use uniform_loader::CatalogError;
use uniform_types::FunctionFamily;

/// Result alias used across the generator crate.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors that abort a generator pass.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A parser descriptor lacks the body the family needs.
    #[error("{family}: parser descriptor #{index} ('{uniform_type}') has no {field} body")]
    MissingBody {
        family: FunctionFamily,
        index: usize,
        uniform_type: String,
        field: &'static str,
    },

    /// The generated module could not be written.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The existing module could not be read for comparison.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
