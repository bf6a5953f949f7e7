//! Error types for dispatched calls.
//!
//! This module contains the errors a terminal call can surface. There is no
//! local recovery: every error propagates synchronously to the caller of the
//! terminal call.
//!
//! # Example
//!
//! ```rust,ignore
//! use twitter_api::{ApiError, Client, Params};
//!
//! match client.resource("statuses").call("show", Params::new().param("id", 1)).await {
//!     Ok(payload) => println!("{payload:?}"),
//!     Err(ApiError::Response(e)) => {
//!         println!("API error {} from {}", e.status, e.url);
//!     }
//!     Err(ApiError::Transport(e)) => println!("transport failure: {e}"),
//!     Err(ApiError::Decode(e)) => println!("bad JSON in success body: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a dispatched call receives a non-200 HTTP status.
///
/// Carries enough detail to diagnose the failure without inspecting the
/// transport: status code, the request URL, the raw response body, and a
/// best-effort message extracted from a JSON error body.
///
/// # Example
///
/// ```rust
/// use twitter_api::ResponseError;
///
/// let error = ResponseError::from_response(
///     404,
///     "https://api.twitter.com/1/statuses/show/1.json".to_string(),
///     Some("application/json"),
///     r#"{"error":"Not found"}"#.to_string(),
/// );
///
/// assert_eq!(error.status, 404);
/// assert_eq!(error.message.as_deref(), Some("Not found"));
/// assert!(error.to_string().contains("Not found"));
/// ```
#[derive(Debug, Error)]
#[error("Response code {status} from {url}{}", message_suffix(.message))]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The URL the request was dispatched to.
    pub url: String,
    /// The raw response body text.
    pub body: String,
    /// Error message extracted from a JSON error body, when one was present.
    pub message: Option<String>,
}

impl ResponseError {
    /// Builds a response error, extracting a message from the body when
    /// possible.
    ///
    /// Extraction is best-effort: it runs only when the content-type
    /// contains the substring `json`, and only a top-level string `error`
    /// field qualifies. A malformed body or an absent field yields no
    /// message, never a secondary error.
    #[must_use]
    pub fn from_response(
        status: u16,
        url: String,
        content_type: Option<&str>,
        body: String,
    ) -> Self {
        let message = content_type
            .filter(|ct| ct.contains("json"))
            .and_then(|_| extract_error_message(&body));

        Self {
            status,
            url,
            body,
            message,
        }
    }
}

/// Renders the ` - message` tail of the display form, when a message was
/// extracted.
fn message_suffix(message: &Option<String>) -> String {
    message
        .as_ref()
        .map_or_else(String::new, |m| format!(" - {m}"))
}

/// Pulls the `error` field out of a JSON error body, if it parses and the
/// field is a string.
fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("error")?
        .as_str()
        .map(ToString::to_string)
}

/// Unified error type for dispatched calls.
///
/// Use pattern matching to handle the specific failure class; nothing is
/// retried or suppressed by the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API answered with a non-200 status.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The transport failed (connection, timeout, TLS). Propagated from the
    /// HTTP layer unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// A 200 response in JSON format carried a body that does not parse.
    #[error("Malformed JSON in response body: {0}")]
    Decode(#[from] serde_json::Error),
}
