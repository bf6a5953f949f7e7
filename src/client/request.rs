//! Request descriptor types.
//!
//! This module turns an accumulated resource path, a terminal call name, and
//! an argument mapping into a concrete [`Request`]: HTTP method, full URL,
//! and the parameters left to encode as query string or form body.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use crate::config::{Session, API_VERSION};

/// Call names dispatched as POST instead of GET.
pub const MUTATING_CALLS: [&str; 4] = ["new", "create", "update", "destroy"];

/// HTTP methods used by the dispatcher.
///
/// The API is driven entirely through GET and POST; the verb is derived from
/// the terminal call name, never chosen by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET, used for every non-mutating call.
    Get,
    /// HTTP POST, used for the calls in [`MUTATING_CALLS`].
    Post,
}

impl Method {
    /// Returns the method implied by a terminal call name.
    #[must_use]
    pub fn for_call(call: &str) -> Self {
        if MUTATING_CALLS.contains(&call) {
            Self::Post
        } else {
            Self::Get
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
        }
    }
}

/// A single argument value: a string or a number.
///
/// # Example
///
/// ```rust
/// use twitter_api::ParamValue;
///
/// let text: ParamValue = "hello".into();
/// let id: ParamValue = 42.into();
/// assert_eq!(text.to_string(), "hello");
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    /// A string value.
    Str(String),
    /// An integer value.
    Int(i64),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

/// The argument mapping of a terminal call.
///
/// Keys are unique (no repeated-key encoding) and iterate in sorted order,
/// so encoded output is deterministic. An `id` entry is special-cased by
/// [`Request::build`] into the URL path instead of the query/body.
///
/// # Example
///
/// ```rust
/// use twitter_api::Params;
///
/// let params = Params::new().param("page", 2).param("q", "foo");
/// assert_eq!(params.len(), 2);
/// assert_eq!(
///     params.to_pairs(),
///     vec![("page".to_string(), "2".to_string()), ("q".to_string(), "foo".to_string())]
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Creates an empty argument mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument, replacing any previous value for the key.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds an argument in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Removes and returns an argument.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    /// Returns the value for a key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no arguments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the arguments in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Renders the arguments as string pairs, ready for query or form
    /// encoding.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a ParamValue);
    type IntoIter = btree_map::Iter<'a, String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A fully-derived request descriptor.
///
/// Exists only for the duration of one dispatch. `url` is the complete
/// request URL without query string; `params` holds what is left of the
/// argument mapping after `id` extraction, to be sent as a query string
/// (GET) or form body (POST) — or not at all when empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method, derived from the call name.
    pub method: Method,
    /// The full URL, including host, version segment (non-search only),
    /// spliced `id`, and format extension.
    pub url: String,
    /// Arguments remaining after `id` extraction.
    pub params: Params,
}

impl Request {
    /// Derives a request descriptor from an accumulated path and a terminal
    /// call.
    ///
    /// The translation rules:
    ///
    /// 1. POST iff `call` is in [`MUTATING_CALLS`], else GET.
    /// 2. Path is `base_path? / segments… / call`; an `id` argument is
    ///    removed from the mapping and appended as one more path segment,
    ///    percent-encoded.
    /// 3. `call == "search"` routes to the search host with no version
    ///    segment; everything else routes to the api host with the literal
    ///    [`API_VERSION`] segment.
    /// 4. The session's format extension terminates the path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twitter_api::{Method, Params, Request, Session};
    ///
    /// let session = Session::default();
    /// let segments = vec!["statuses".to_string()];
    /// let request = Request::build(&session, &segments, "destroy", Params::new().param("id", 42));
    ///
    /// assert_eq!(request.method, Method::Post);
    /// assert_eq!(request.url, "https://api.twitter.com/1/statuses/destroy/42.json");
    /// assert!(request.params.is_empty());
    /// ```
    #[must_use]
    pub fn build(session: &Session, segments: &[String], call: &str, mut params: Params) -> Self {
        let method = Method::for_call(call);

        let mut path = String::new();
        if let Some(base) = session.base_path() {
            path.push_str(base);
            path.push('/');
        }
        for segment in segments {
            path.push_str(segment);
            path.push('/');
        }
        path.push_str(call);

        if let Some(id) = params.remove("id") {
            path.push('/');
            path.push_str(&urlencoding::encode(&id.to_string()));
        }

        let extension = session.format().extension();
        let url = if call == "search" {
            // Search lives on its own host and takes no version segment.
            format!("{}/{path}.{extension}", session.search_host())
        } else {
            format!("{}/{API_VERSION}/{path}.{extension}", session.api_host())
        };

        Self {
            method,
            url,
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Format;

    fn segments(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_method_for_mutating_calls_is_post() {
        for call in MUTATING_CALLS {
            assert_eq!(Method::for_call(call), Method::Post, "call {call}");
        }
    }

    #[test]
    fn test_method_for_other_calls_is_get() {
        for call in ["public_timeline", "followers", "show", "search", "ids"] {
            assert_eq!(Method::for_call(call), Method::Get, "call {call}");
        }
    }

    #[test]
    fn test_build_simple_get() {
        let session = Session::default();
        let request = Request::build(
            &session,
            &segments(&["statuses"]),
            "public_timeline",
            Params::new(),
        );

        assert_eq!(request.method, Method::Get);
        assert_eq!(
            request.url,
            "https://api.twitter.com/1/statuses/public_timeline.json"
        );
        assert!(request.params.is_empty());
    }

    #[test]
    fn test_build_root_level_call_has_no_segment_prefix() {
        let session = Session::default();
        let request = Request::build(&session, &[], "help", Params::new());

        assert_eq!(request.url, "https://api.twitter.com/1/help.json");
    }

    #[test]
    fn test_build_deep_chain_joins_all_segments() {
        let session = Session::default();
        let request = Request::build(
            &session,
            &segments(&["statuses", "friends", "extra"]),
            "ids",
            Params::new(),
        );

        assert_eq!(
            request.url,
            "https://api.twitter.com/1/statuses/friends/extra/ids.json"
        );
    }

    #[test]
    fn test_build_id_is_spliced_into_path_and_removed_from_params() {
        let session = Session::default();
        let request = Request::build(
            &session,
            &segments(&["statuses"]),
            "destroy",
            Params::new().param("id", 42).param("text", "hi"),
        );

        assert_eq!(request.method, Method::Post);
        assert_eq!(
            request.url,
            "https://api.twitter.com/1/statuses/destroy/42.json"
        );
        assert_eq!(
            request.params.to_pairs(),
            vec![("text".to_string(), "hi".to_string())]
        );
    }

    #[test]
    fn test_build_params_with_only_id_leaves_empty_mapping() {
        let session = Session::default();
        let request = Request::build(
            &session,
            &segments(&["users"]),
            "show",
            Params::new().param("id", 12345),
        );

        assert_eq!(request.url, "https://api.twitter.com/1/users/show/12345.json");
        assert!(request.params.is_empty());
    }

    #[test]
    fn test_build_string_id_is_percent_encoded() {
        let session = Session::default();
        let request = Request::build(
            &session,
            &segments(&["users"]),
            "show",
            Params::new().param("id", "user name"),
        );

        assert_eq!(
            request.url,
            "https://api.twitter.com/1/users/show/user%20name.json"
        );
    }

    #[test]
    fn test_build_search_uses_search_host_without_version() {
        let session = Session::default();
        let request = Request::build(&session, &[], "search", Params::new().param("q", "foo"));

        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url, "https://search.twitter.com/search.json");
        assert_eq!(
            request.params.to_pairs(),
            vec![("q".to_string(), "foo".to_string())]
        );
        assert!(!request.url.contains("/1/"));
    }

    #[test]
    fn test_build_search_under_a_chain_still_routes_to_search_host() {
        let session = Session::default();
        let request = Request::build(&session, &segments(&["users"]), "search", Params::new());

        assert_eq!(request.url, "https://search.twitter.com/users/search.json");
    }

    #[test]
    fn test_build_uses_session_format_extension() {
        let session = Session::default().with_format(Format::Atom);
        let request = Request::build(&session, &segments(&["statuses"]), "user_timeline", Params::new());

        assert_eq!(
            request.url,
            "https://api.twitter.com/1/statuses/user_timeline.atom"
        );
    }

    #[test]
    fn test_build_prepends_base_path() {
        let session = Session::builder().base_path("beta").build();
        let request = Request::build(&session, &segments(&["statuses"]), "show", Params::new());

        assert_eq!(request.url, "https://api.twitter.com/1/beta/statuses/show.json");
    }

    #[test]
    fn test_params_iterate_in_key_order() {
        let params = Params::new().param("z", 1).param("a", 2).param("m", "x");
        let keys: Vec<&str> = params.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["a", "m", "z"]);
    }

    #[test]
    fn test_params_replace_value_for_duplicate_key() {
        let params = Params::new().param("page", 1).param("page", 2);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("page"), Some(&ParamValue::Int(2)));
    }
}
