//! Catalog Loading and Linting
//!
//! This crate provides functionality for loading template catalogs from a
//! catalog directory, checking their shape, and linting their content before
//! code generation.

pub mod error;
pub mod file;
pub mod lint;

// Re-export commonly used types at the crate root
pub use error::CatalogError;
pub use file::{CatalogDir, CATALOG_EXTENSION};
pub use lint::{lint_ubo_catalogs, lint_uniform_catalogs, LintFinding, LintKind};

// Re-export uniform_types for convenience
pub use uniform_types;
