//! The request dispatcher.
//!
//! This module provides the [`Client`] type that turns a terminal call into
//! exactly one HTTP request and decodes the result.

use crate::client::errors::ApiError;
use crate::client::request::{Method, Params, Request};
use crate::client::resource::Resource;
use crate::client::response::{decode, Payload};
use crate::config::Session;

/// The API client: a [`Session`] plus the HTTP transport.
///
/// The client holds no mutable state. Each terminal call builds a transient
/// [`Request`], sends it once, and decodes the outcome — no retries, no
/// queuing, no locking. Independent call chains may run concurrently from
/// separate tasks.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use twitter_api::{Client, Params, Session};
///
/// let client = Client::new(
///     Session::builder().username("alice").secret("hunter2").build(),
/// );
///
/// // Page two of the user's followers.
/// let entries = client
///     .resource("statuses")
///     .call("followers", Params::new().param("page", 2))
///     .await?;
///
/// // Root-level search.
/// let results = client.call("search", Params::new().param("q", "foo")).await?;
/// ```
#[derive(Debug)]
pub struct Client {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// Configuration shared by every handle derived from this client.
    session: Session,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Default for Client {
    fn default() -> Self {
        Self::new(Session::default())
    }
}

impl Client {
    /// Creates a client over the given session.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(session: Session) -> Self {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self { http, session }
    }

    /// Returns the session this client was built with.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Starts a resource chain at the given segment.
    #[must_use]
    pub fn resource(&self, name: impl Into<String>) -> Resource<'_> {
        Resource::root(self, name)
    }

    /// Dispatches a terminal call with an empty resource chain
    /// (e.g., the root-level `search` call).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on a non-200 status, a transport failure, or a
    /// malformed JSON success body.
    pub async fn call(&self, name: &str, params: Params) -> Result<Payload, ApiError> {
        self.dispatch(&[], name, params).await
    }

    /// Builds, sends, and decodes one request.
    pub(crate) async fn dispatch(
        &self,
        segments: &[String],
        call: &str,
        params: Params,
    ) -> Result<Payload, ApiError> {
        let request = Request::build(&self.session, segments, call, params);
        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");

        let mut builder = match request.method {
            Method::Get => self.http.get(&request.url),
            Method::Post => self.http.post(&request.url),
        };

        // The origin answers 417 to any Expect negotiation.
        builder = builder.header(reqwest::header::EXPECT, "");

        if let Some(agent) = self.session.user_agent() {
            builder = builder.header(reqwest::header::USER_AGENT, agent);
        }

        if let Some((username, secret)) = self.session.credentials() {
            builder = builder.basic_auth(username, Some(secret));
        }

        if !request.params.is_empty() {
            let pairs = request.params.to_pairs();
            builder = match request.method {
                Method::Get => builder.query(&pairs),
                Method::Post => builder.form(&pairs),
            };
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let url = response.url().to_string();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        let body = response.text().await?;

        decode(
            self.session.format(),
            status,
            &url,
            content_type.as_deref(),
            body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Format;

    #[test]
    fn test_client_exposes_its_session() {
        let session = Session::builder()
            .username("alice")
            .secret("hunter2")
            .format(Format::Xml)
            .build();
        let client = Client::new(session);

        assert_eq!(client.session().format(), Format::Xml);
        assert_eq!(client.session().credentials(), Some(("alice", "hunter2")));
    }

    #[test]
    fn test_default_client_is_anonymous_json() {
        let client = Client::default();
        assert_eq!(client.session().format(), Format::Json);
        assert!(client.session().credentials().is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }

    #[test]
    fn test_handles_share_one_session() {
        let client = Client::new(Session::default().with_user_agent("agent/1"));
        let a = client.resource("statuses");
        let b = client.resource("users");

        // Both handles read the same immutable session through the client.
        assert_eq!(client.session().user_agent(), Some("agent/1"));
        assert_eq!(a.segments(), ["statuses"]);
        assert_eq!(b.segments(), ["users"]);
    }
}
