//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction.

use crate::error::ConfigError;
use std::fmt;

/// A Basic-auth password.
///
/// The value is masked in debug output so a logged [`Session`] cannot leak
/// credentials.
///
/// # Example
///
/// ```rust
/// use twitter_api::Secret;
///
/// let secret = Secret::new("hunter2");
/// assert_eq!(secret.as_ref(), "hunter2");
/// assert_eq!(format!("{:?}", secret), "Secret(*****)");
/// ```
///
/// [`Session`]: crate::Session
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wraps a password value.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }
}

impl AsRef<str> for Secret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(*****)")
    }
}

/// A validated base URL for one of the API hosts.
///
/// Used for the `api` and `search` host slots of a [`Session`]. The URL must
/// carry an `http://` or `https://` scheme and a non-empty host; a trailing
/// slash is stripped so paths can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use twitter_api::HostUrl;
///
/// let host = HostUrl::new("https://api.twitter.com/").unwrap();
/// assert_eq!(host.as_ref(), "https://api.twitter.com");
///
/// assert!(HostUrl::new("api.twitter.com").is_err());
/// ```
///
/// [`Session`]: crate::Session
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(String);

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no http(s)
    /// scheme or no host part.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ConfigError::InvalidHostUrl { url }),
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
