//! Resource path handles.
//!
//! This module provides the [`Resource`] type: an immutable, accumulated
//! sequence of resource-name segments that decides where a pending terminal
//! call will be dispatched.

use crate::client::dispatch::Client;
use crate::client::errors::ApiError;
use crate::client::request::Params;
use crate::client::response::Payload;

/// An accumulated resource path, bound to the client it was derived from.
///
/// Each [`resource`](Self::resource) step appends one segment and yields a
/// **new** handle; the original is unchanged, so handles derived from the
/// same root never interfere. Segment names are arbitrary strings — numeric
/// segments, reserved words, anything the remote hierarchy uses — and chains
/// can be arbitrarily deep.
///
/// Handles are cheap, created on demand, and discarded after the terminal
/// call; nothing is cached.
///
/// # Example
///
/// ```rust,ignore
/// use twitter_api::{Client, Params, Session};
///
/// let client = Client::new(Session::default());
///
/// // GET https://api.twitter.com/1/statuses/public_timeline.json
/// let entries = client
///     .resource("statuses")
///     .call("public_timeline", Params::new())
///     .await?;
///
/// // POST https://api.twitter.com/1/direct_messages/new.json
/// client
///     .resource("direct_messages")
///     .call("new", Params::new().param("user", 12345).param("text", "foo"))
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct Resource<'a> {
    client: &'a Client,
    segments: Vec<String>,
}

impl<'a> Resource<'a> {
    pub(crate) fn root(client: &'a Client, name: impl Into<String>) -> Self {
        Self {
            client,
            segments: vec![name.into()],
        }
    }

    /// Returns a new handle with one more segment appended.
    ///
    /// The original handle is left untouched.
    #[must_use]
    pub fn resource(&self, name: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.into());
        Self {
            client: self.client,
            segments,
        }
    }

    /// Returns the accumulated path segments.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Dispatches a terminal call at this path.
    ///
    /// The call name becomes the final path segment and decides the HTTP
    /// verb; see [`Request::build`](crate::Request::build) for the full
    /// translation rules.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on a non-200 status, a transport failure, or a
    /// malformed JSON success body.
    pub async fn call(&self, name: &str, params: Params) -> Result<Payload, ApiError> {
        self.client.dispatch(&self.segments, name, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Session;

    #[test]
    fn test_resource_appends_without_mutating_original() {
        let client = Client::new(Session::default());
        let statuses = client.resource("statuses");
        let friends = statuses.resource("friends");

        assert_eq!(statuses.segments(), ["statuses"]);
        assert_eq!(friends.segments(), ["statuses", "friends"]);
    }

    #[test]
    fn test_sibling_handles_are_independent() {
        let client = Client::new(Session::default());
        let root = client.resource("statuses");
        let left = root.resource("followers");
        let right = root.resource("friends");

        assert_eq!(left.segments(), ["statuses", "followers"]);
        assert_eq!(right.segments(), ["statuses", "friends"]);
        assert_eq!(root.segments(), ["statuses"]);
    }

    #[test]
    fn test_segments_accept_arbitrary_strings() {
        let client = Client::new(Session::default());
        let handle = client.resource("1").resource("new").resource("weird name");

        assert_eq!(handle.segments(), ["1", "new", "weird name"]);
    }

    #[test]
    fn test_chains_have_no_depth_limit() {
        let client = Client::new(Session::default());
        let mut handle = client.resource("a");
        for _ in 0..32 {
            handle = handle.resource("b");
        }
        assert_eq!(handle.segments().len(), 33);
    }
}
