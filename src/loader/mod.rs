//! YAML Loader module
//!
//! Parse resource schema definitions from YAML files.
//!
//! # Overview
//!
//! The loader module provides:
//! - `load_schema` - built-in schema by name, or a YAML file by path
//! - `load_schema_from_str` - YAML parsing with structural validation
//!
//! Structural validation rejects discriminators that reference undeclared or
//! non-string attributes and variants whose required names are not allowed.

mod parser;

pub use parser::{load_schema, load_schema_from_str, load_schemas_from_dir};

#[cfg(test)]
mod tests;
