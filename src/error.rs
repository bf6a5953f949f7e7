//! Error types for client configuration.
//!
//! This module contains the errors raised while building a [`Session`],
//! before any request can be dispatched.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation: an invalid output format or host override means no
//! client is ever produced.
//!
//! # Example
//!
//! ```rust
//! use twitter_api::{ConfigError, Format};
//!
//! let result = "yaml".parse::<Format>();
//! assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
//! ```
//!
//! [`Session`]: crate::Session

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant is fatal: construction fails immediately and no partial
/// client is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested output format is not one the API serves.
    #[error("Unsupported format '{format}'. Expected one of: json, xml, rss, atom.")]
    UnsupportedFormat {
        /// The format string that was provided.
        format: String,
    },

    /// A host override is not a usable base URL.
    #[error("Invalid host URL '{url}'. Expected an http(s) URL with a host (e.g., 'https://api.twitter.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
