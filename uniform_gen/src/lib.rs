//! Uniform Sync Function Generator
//!
//! Wraps catalog template bodies into function literals and serializes them
//! into the two generated uniform sync modules.

pub mod codegen;
pub mod error;
pub mod output;

pub use codegen::rewrite::LocationIndex;
pub use codegen::{generate_ubo_module, generate_uniform_module, CodeGeneratorOptions, Pass};
pub use error::{GenerateError, GenerateResult};
pub use output::{check_module, write_module, CheckStatus};
