//! Resource schema module
//!
//! Declared attribute types of a resource, used to decode JSON configuration
//! and to run discriminator validation over a whole configuration tree.
//!
//! # Features
//!
//! - **Typed attributes**: string, number, bool, list, set, map and object
//! - **Per-object discriminators**: any object level may name a string
//!   attribute that selects a variant
//! - **Schema-directed decoding**: JSON arrays become lists or sets and JSON
//!   objects become maps or objects as declared; `${...}` strings are unknown
//! - **Whole-tree validation**: every instance of a discriminated object is
//!   validated, however deeply it is nested

mod decode;
mod types;
mod walker;

pub use decode::{decode_value, is_unresolved};
pub use types::{AttributeType, Discriminator, ObjectType, Schema};
pub use walker::SchemaValidator;
