//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for the Catalog Browser
//!
//! The only failure a user ever sees at runtime is a catalog load failure.
//! Everything else here covers startup plumbing (config, logging, terminal)
//! and launching the system browser.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Why fetching or decoding the catalog failed.
#[derive(Debug, Error)]
pub enum LoadFailure {
    /// Reading a local catalog file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport error or non-success status from a remote catalog.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The document is not a JSON array of entries.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Unified error type for all catalog browser operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// The single startup fetch of the catalog failed.
    #[error("Failed to load catalog from {location}: {cause}")]
    LoadFailed {
        location: String,
        #[source]
        cause: LoadFailure,
    },

    /// The configured catalog source could not be interpreted.
    #[error("Invalid catalog source '{input}': {reason}")]
    InvalidSource { input: String, reason: String },

    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),

    /// Raw mode, alternate screen or backend setup/teardown failed.
    #[error("Terminal error: failed to {action}: {source}")]
    Terminal {
        action: &'static str,
        #[source]
        source: io::Error,
    },

    /// The platform opener refused the link.
    #[error("Could not open {url}: {source}")]
    Browser {
        url: String,
        #[source]
        source: io::Error,
    },

    /// No home directory to derive the config path from.
    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl AppError {
    /// Create a load failure for the given catalog location
    pub fn load_failed<S, C>(location: S, cause: C) -> Self
    where
        S: Into<String>,
        C: Into<LoadFailure>,
    {
        Self::LoadFailed {
            location: location.into(),
            cause: cause.into(),
        }
    }

    /// Create an invalid source error
    pub fn invalid_source<S1: Into<String>, S2: Into<String>>(input: S1, reason: S2) -> Self {
        Self::InvalidSource {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a browser launch error
    pub fn browser<S: Into<String>>(url: S, source: io::Error) -> Self {
        Self::Browser {
            url: url.into(),
            source,
        }
    }

    /// Create a terminal error for the step that failed
    pub fn terminal(action: &'static str, source: io::Error) -> Self {
        Self::Terminal { action, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_failure_message_names_location() {
        let parse_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = AppError::load_failed("static/data/servers.json", parse_err);

        assert!(matches!(err, AppError::LoadFailed { .. }));
        let msg = err.to_string();
        assert!(msg.contains("static/data/servers.json"));
        assert!(msg.contains("invalid catalog JSON"));
    }

    #[test]
    fn test_terminal_error_names_failed_step() {
        let err = AppError::terminal(
            "enable raw mode",
            io::Error::new(io::ErrorKind::Unsupported, "not a tty"),
        );
        assert_eq!(
            err.to_string(),
            "Terminal error: failed to enable raw mode: not a tty"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_toml_serialize_error_converts() {
        // TOML cannot encode a bare value at the top level
        let ser_err = toml::to_string(&42_u8).unwrap_err();
        let err: AppError = ser_err.into();
        assert!(matches!(err, AppError::ConfigSerialize(_)));
    }
}
