//! Uniform Sync Catalog Types
//!
//! This crate contains the core type definitions for the uniform sync
//! generator. It provides pure data structures for representing template
//! catalogs and function families without any file I/O or code generation
//! logic.

pub mod family;
pub mod types;

// Re-export commonly used types at the crate root
pub use family::*;
pub use types::*;
