//! Built-in schema definitions embedded in the binary
//!
//! This module embeds the schemas of supported Atlas resources directly into
//! the binary, allowing users to use `--schema stream_connection` instead of
//! specifying a file path.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Built-in schema YAML definitions
pub static BUILTIN_SCHEMAS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Monitoring & Alerts
    m.insert(
        "alert_configuration",
        include_str!("../schemas/alert_configuration.yaml"),
    );
    m.insert(
        "third_party_integration",
        include_str!("../schemas/third_party_integration.yaml"),
    );

    // Stream Processing
    m.insert(
        "stream_connection",
        include_str!("../schemas/stream_connection.yaml"),
    );

    m
});

/// Get a built-in schema by name
pub fn get_builtin(name: &str) -> Option<&'static str> {
    BUILTIN_SCHEMAS.get(name).copied()
}

/// Check if a name is a built-in schema
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_SCHEMAS.contains_key(name)
}

/// List all built-in schema names, sorted
pub fn list_builtin() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BUILTIN_SCHEMAS.keys().copied().collect();
    names.sort_unstable();
    names
}
