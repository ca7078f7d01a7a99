//! # Atlas Validators
//!
//! Schema-level validation for MongoDB Atlas infrastructure configuration.
//!
//! Atlas resources frequently model a `oneOf` payload as a flat set of
//! attributes plus a string "discriminator" (usually `type`) that selects the
//! active variant. This crate checks, at validate time, that the sibling
//! attributes of every discriminator match the selected variant.
//!
//! ## Features
//!
//! - **Tri-state config trees**: known, null and unknown values over objects,
//!   lists, maps and sets
//! - **Attribute paths**: Terraform-style paths with parent/sibling resolution
//! - **Discriminator validator**: allowed/required sibling checks per variant
//! - **Schemas**: YAML schema definitions, schema-directed JSON decoding and a
//!   whole-tree validation pass
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use atlas_validators::{load_schema, SchemaValidator};
//!
//! let schema = load_schema("stream_connection")?;
//! let config = schema.decode(&serde_json::json!({
//!     "type": "Cluster",
//!     "url": "https://example.com"
//! }))?;
//!
//! let diagnostics = SchemaValidator::new(&schema).validate(&config);
//! for diagnostic in &diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │   CLI / HTTP server     validate · check · describe · serve│
//! └────────────────────────────────────────────────────────────┘
//!                              │
//! ┌──────────┬─────────────────┴──────────┬────────────────────┐
//! │  Loader  │         Schema             │     Validator      │
//! ├──────────┼────────────────────────────┼────────────────────┤
//! │ YAML     │ decode JSON → Value        │ StringValidator    │
//! │ built-in │ walk discriminated objects │ discriminator rules│
//! └──────────┴────────────────────────────┴────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴──────┬────────────────────────┐
//! │    Value     │       Path         │      Diagnostics       │
//! └──────────────┴────────────────────┴────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Pedantic lints that aren't critical for this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Tri-state configuration values
pub mod value;

/// Attribute paths and path resolution
pub mod path;

/// Validation diagnostics
pub mod diag;

/// Attribute validators
pub mod validator;

/// Resource schemas, decoding and whole-tree validation
pub mod schema;

/// YAML loader for schema definitions
pub mod loader;

/// Built-in schema definitions
pub mod builtin;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use diag::{Diagnostic, Diagnostics, Severity};
pub use loader::{load_schema, load_schema_from_str};
pub use path::{AttributePath, PathStep};
pub use schema::{Schema, SchemaValidator};
pub use validator::{
    validate_discriminator, DiscriminatorDefinition, DiscriminatorValidator, StringValidator,
    VariantDefinition,
};
pub use value::{Known, Value, ValueState};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
