//! Attribute path module
//!
//! Addresses a single attribute or element inside a configuration value.
//!
//! # Overview
//!
//! A path is a sequence of steps, each of which descends one level:
//! - `AttributeName` - an object attribute (`nested.type`)
//! - `ElementKeyInt` - a list element by index (`items[0]`)
//! - `ElementKeyString` - a map element by key (`items["conn1"]`)
//! - `ElementKeyValue` - a set element by its full value
//!
//! Resolution treats lookup misses as null and never panics.

mod resolve;
mod types;

pub use types::{AttributePath, PathStep};
