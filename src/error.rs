//! Error types for catalog-sync
//!
//! This module defines the error hierarchy for the whole pipeline.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Every variant maps to exactly one pipeline [`Stage`], so callers can
//! tell a fetch failure from a convert or upload failure.

use thiserror::Error;

/// The main error type for catalog-sync
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Undefined variable in key template: {variable}")]
    UndefinedVariable { variable: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Fetch Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Convert Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Expected a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },

    #[error("Conversion failed: {message}")]
    Convert { message: String },

    // ============================================================================
    // Upload Errors
    // ============================================================================
    #[error("Object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    #[error("Upload failed: {message}")]
    Upload { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// The pipeline stage an error originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Configuration loading or validation
    Config,
    /// The HTTP fetch stage
    Fetch,
    /// The JSON → NDJSON conversion stage
    Convert,
    /// The object-storage upload stage
    Upload,
    /// Local filesystem access
    Io,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Config => "config",
            Stage::Fetch => "fetch",
            Stage::Convert => "convert",
            Stage::Upload => "upload",
            Stage::Io => "io",
        };
        f.write_str(name)
    }
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an undefined variable error
    pub fn undefined_var(variable: impl Into<String>) -> Self {
        Self::UndefinedVariable {
            variable: variable.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a not-an-array error naming the actual top-level type
    pub fn not_an_array(found: &'static str) -> Self {
        Self::NotAnArray { found }
    }

    /// Create a conversion error
    pub fn convert(message: impl Into<String>) -> Self {
        Self::Convert {
            message: message.into(),
        }
    }

    /// Create an upload error
    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }

    /// Create a file-not-found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// The pipeline stage this error belongs to
    pub fn stage(&self) -> Stage {
        match self {
            Error::Config { .. }
            | Error::UndefinedVariable { .. }
            | Error::YamlParse(_)
            | Error::InvalidUrl(_) => Stage::Config,
            Error::Http(_) | Error::HttpStatus { .. } | Error::Timeout { .. } => Stage::Fetch,
            Error::JsonParse(_) | Error::NotAnArray { .. } | Error::Convert { .. } => {
                Stage::Convert
            }
            Error::ObjectStore(_) | Error::Upload { .. } => Stage::Upload,
            Error::Io(_) | Error::FileNotFound { .. } => Stage::Io,
            Error::Other(_) | Error::Anyhow(_) => Stage::Io,
        }
    }

    /// Check if this error happened at the HTTP transport layer
    ///
    /// Transport errors (connection failures, timeouts, non-2xx statuses)
    /// are the ones the `empty_catalog` fetch fallback is allowed to
    /// swallow. Parse and shape errors are never transport errors.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::HttpStatus { .. } | Error::Timeout { .. }
        )
    }
}

/// Result type alias for catalog-sync
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::not_an_array("object");
        assert_eq!(
            err.to_string(),
            "Expected a JSON array of records, found object"
        );
    }

    #[test]
    fn test_status_code_in_message() {
        // Non-200 responses must surface the status code to the caller
        let err = Error::http_status(503, "Service unavailable");
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_stage_classification() {
        assert_eq!(Error::config("x").stage(), Stage::Config);
        assert_eq!(Error::http_status(500, "").stage(), Stage::Fetch);
        assert_eq!(Error::Timeout { timeout_ms: 1000 }.stage(), Stage::Fetch);
        assert_eq!(Error::not_an_array("string").stage(), Stage::Convert);
        assert_eq!(Error::upload("x").stage(), Stage::Upload);
        assert_eq!(Error::file_not_found("a.json").stage(), Stage::Io);
    }

    #[test]
    fn test_is_transport() {
        assert!(Error::http_status(404, "").is_transport());
        assert!(Error::Timeout { timeout_ms: 1000 }.is_transport());

        assert!(!Error::not_an_array("object").is_transport());
        assert!(!Error::config("test").is_transport());
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!Error::JsonParse(parse_err).is_transport());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
