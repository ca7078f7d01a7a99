//! Configuration value module
//!
//! The raw configuration of a resource instance, as written by the
//! practitioner and before defaults or computed values are applied.
//!
//! # Overview
//!
//! Every value is in one of three states:
//! - **Known** - a concrete value (string, number, bool or a container)
//! - **Null** - explicitly absent / not set
//! - **Unknown** - an unresolved expression, determined in a later phase
//!
//! Containers are ordered lists, key-ordered maps, unordered sets (whose
//! elements are identified by value, not index) and objects.

mod types;

pub use types::{Known, Value, ValueState};
