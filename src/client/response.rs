//! Response decoding.
//!
//! This module classifies a completed HTTP exchange into a [`Payload`] or an
//! error. Classification is by status code first, then by the session's
//! output format.

use crate::client::errors::{ApiError, ResponseError};
use crate::config::Format;

/// A successfully decoded response body.
///
/// The shape depends on the session's [`Format`]: JSON responses are parsed
/// into a structured value, every other format is handed back as raw text.
///
/// # Example
///
/// ```rust
/// use twitter_api::Payload;
///
/// let payload = Payload::Json(serde_json::json!({"id": 1}));
/// assert_eq!(payload.as_json().unwrap()["id"], 1);
/// assert!(payload.as_raw().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Payload {
    /// A parsed JSON document.
    Json(serde_json::Value),
    /// The unmodified body text of an XML, RSS, or Atom response.
    Raw(String),
}

impl Payload {
    /// Returns the parsed JSON value, if this is a JSON payload.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Consumes the payload, returning the parsed JSON value if present.
    #[must_use]
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Returns the raw body text, if this is a non-JSON payload.
    #[must_use]
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Raw(text) => Some(text),
        }
    }

    /// Consumes the payload, returning the raw body text if present.
    #[must_use]
    pub fn into_raw(self) -> Option<String> {
        match self {
            Self::Json(_) => None,
            Self::Raw(text) => Some(text),
        }
    }
}

/// Decodes one completed exchange.
///
/// A 200 status decodes per `format`; any other status becomes a
/// [`ResponseError`] carrying the status, URL, raw body, and a best-effort
/// message extracted from JSON error bodies.
///
/// # Errors
///
/// - [`ApiError::Response`] for every non-200 status.
/// - [`ApiError::Decode`] when a 200 response in JSON format fails to parse.
pub fn decode(
    format: Format,
    status: u16,
    url: &str,
    content_type: Option<&str>,
    body: String,
) -> Result<Payload, ApiError> {
    if status != 200 {
        return Err(ResponseError::from_response(status, url.to_string(), content_type, body).into());
    }

    match format {
        Format::Json => Ok(Payload::Json(serde_json::from_str(&body)?)),
        Format::Xml | Format::Rss | Format::Atom => Ok(Payload::Raw(body)),
    }
}
