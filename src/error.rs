//! Error types for Atlas Validators
//!
//! This module defines the error hierarchy for the crate. Schema violations
//! found in a configuration are never errors: they are reported as
//! [`Diagnostic`](crate::diag::Diagnostic)s. The `Error` type covers the
//! operational failures around them (loading, parsing, decoding).

use thiserror::Error;

/// The main error type for Atlas Validators
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Schema Errors
    // ============================================================================
    #[error("Schema '{schema}' not found")]
    SchemaNotFound { schema: String },

    #[error("Invalid schema '{schema}': {message}")]
    InvalidSchema { schema: String, message: String },

    // ============================================================================
    // Path Errors
    // ============================================================================
    #[error("Invalid attribute path '{input}': {message}")]
    PathParse { input: String, message: String },

    #[error("Cannot apply step {step} to {kind} value")]
    PathStep { step: String, kind: &'static str },

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Invalid configuration at '{path}': {message}")]
    Decode { path: String, message: String },

    #[error("Configuration has {count} error(s)")]
    ValidationFailed { count: usize },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a schema-not-found error
    pub fn schema_not_found(schema: impl Into<String>) -> Self {
        Self::SchemaNotFound {
            schema: schema.into(),
        }
    }

    /// Create an invalid schema error
    pub fn invalid_schema(schema: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSchema {
            schema: schema.into(),
            message: message.into(),
        }
    }

    /// Create a path parse error
    pub fn path_parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PathParse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Create a decode error anchored at a rendered attribute path
    pub fn decode(path: impl std::fmt::Display, message: impl Into<String>) -> Self {
        let path = path.to_string();
        Self::Decode {
            path: if path.is_empty() {
                "(root)".to_string()
            } else {
                path
            },
            message: message.into(),
        }
    }
}

/// Result type alias for Atlas Validators
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
