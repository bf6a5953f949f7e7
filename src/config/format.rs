//! Output format definitions.
//!
//! This module provides the [`Format`] enum for selecting the representation
//! the API is asked to return.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The response representation requested from the API.
///
/// The format becomes the file extension of every request URL
/// (`statuses/public_timeline.json`). Only JSON responses are parsed by the
/// client; the other formats are returned as raw text.
///
/// # Example
///
/// ```rust
/// use twitter_api::Format;
///
/// // Parse from string
/// let format: Format = "json".parse().unwrap();
/// assert_eq!(format, Format::Json);
/// assert_eq!(format.extension(), "json");
///
/// // Anything outside the supported set is rejected
/// assert!("yaml".parse::<Format>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// JSON, parsed into a structured value on success.
    #[default]
    Json,
    /// XML, returned as raw text.
    Xml,
    /// RSS, returned as raw text.
    Rss,
    /// Atom, returned as raw text.
    Atom,
}

impl Format {
    /// Returns the URL file extension for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
            Self::Rss => "rss",
            Self::Atom => "atom",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            "rss" => Ok(Self::Rss),
            "atom" => Ok(Self::Atom),
            other => Err(ConfigError::UnsupportedFormat {
                format: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_json() {
        assert_eq!(Format::default(), Format::Json);
    }

    #[test]
    fn test_parse_supported_formats() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("xml".parse::<Format>().unwrap(), Format::Xml);
        assert_eq!("rss".parse::<Format>().unwrap(), Format::Rss);
        assert_eq!("atom".parse::<Format>().unwrap(), Format::Atom);
    }

    #[test]
    fn test_parse_unsupported_format_fails() {
        let result = "yaml".parse::<Format>();
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedFormat { format }) if format == "yaml"
        ));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // The wire format is lowercase; anything else is rejected rather
        // than silently normalized.
        assert!("JSON".parse::<Format>().is_err());
    }

    #[test]
    fn test_extension_matches_display() {
        for format in [Format::Json, Format::Xml, Format::Rss, Format::Atom] {
            assert_eq!(format.extension(), format.to_string());
        }
    }

    #[test]
    fn test_serde_round_trip_as_lowercase_string() {
        let json = serde_json::to_string(&Format::Atom).unwrap();
        assert_eq!(json, r#""atom""#);
        let parsed: Format = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Format::Atom);
    }
}
