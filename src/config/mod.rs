//! Configuration types for the client.
//!
//! This module provides the session configuration shared by every path
//! handle derived from one client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Session`]: the immutable per-client configuration bundle
//! - [`SessionBuilder`]: a builder for constructing [`Session`] instances
//! - [`Format`]: the enumerated output format
//! - [`Secret`]: a Basic-auth password with masked debug output
//! - [`HostUrl`]: a validated host override
//!
//! # Example
//!
//! ```rust
//! use twitter_api::{Format, Session};
//!
//! let session = Session::builder()
//!     .username("alice")
//!     .secret("hunter2")
//!     .format(Format::Json)
//!     .user_agent("my-bot/0.1")
//!     .build();
//!
//! assert!(session.credentials().is_some());
//! ```

mod format;
mod newtypes;
mod version;

pub use format::Format;
pub use newtypes::{HostUrl, Secret};
pub use version::API_VERSION;

/// Default host serving versioned API resources.
pub const DEFAULT_API_HOST: &str = "https://api.twitter.com";

/// Default host serving search, which carries no version segment.
pub const DEFAULT_SEARCH_HOST: &str = "https://search.twitter.com";

/// Immutable configuration shared by all path handles of one client.
///
/// A `Session` is created once, and every handle derived from the client
/// carries a read-only view of it. There is no in-place mutation: the
/// `with_*` methods return a **new** `Session`, so handles created earlier
/// keep the configuration they were created with.
///
/// # Thread Safety
///
/// `Session` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use twitter_api::{Format, Session};
///
/// let session = Session::default();
/// assert_eq!(session.format(), Format::Json);
///
/// let xml = session.clone().with_format(Format::Xml);
/// assert_eq!(xml.format(), Format::Xml);
/// assert_eq!(session.format(), Format::Json); // original untouched
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    username: Option<String>,
    secret: Option<Secret>,
    format: Format,
    user_agent: Option<String>,
    base_path: Option<String>,
    api_host: HostUrl,
    search_host: HostUrl,
}

// Verify Session is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Session>();
};

impl Default for Session {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Session {
    /// Creates a new builder for constructing a `Session`.
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Returns the Basic-auth username, if set.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Returns the Basic-auth credential pair, when BOTH halves are set.
    ///
    /// Requests are authenticated only in that case; a lone username or
    /// secret is ignored.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.secret) {
            (Some(user), Some(secret)) => Some((user.as_str(), secret.as_ref())),
            _ => None,
        }
    }

    /// Returns the output format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Returns the User-Agent header value, if set.
    #[must_use]
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// Returns the custom base path prefixed to every resource chain, if set.
    #[must_use]
    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    /// Returns the host serving versioned API resources.
    #[must_use]
    pub const fn api_host(&self) -> &HostUrl {
        &self.api_host
    }

    /// Returns the host serving search.
    #[must_use]
    pub const fn search_host(&self) -> &HostUrl {
        &self.search_host
    }

    /// Returns a new session with a different output format.
    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Returns a new session with a different User-Agent value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Returns a new session with Basic-auth credentials.
    #[must_use]
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        self.username = Some(username.into());
        self.secret = Some(Secret::new(secret));
        self
    }

    /// Returns a new session with a custom base path.
    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = normalize_base_path(base_path.into());
        self
    }
}

/// Strips surrounding slashes; an all-slash or empty path means "no prefix".
fn normalize_base_path(path: String) -> Option<String> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Builder for constructing [`Session`] instances.
///
/// Every field has a default: anonymous, JSON format, no User-Agent, no base
/// path, production hosts. The host slots accept a pre-validated [`HostUrl`],
/// so `build()` is infallible.
///
/// # Example
///
/// ```rust
/// use twitter_api::{Format, HostUrl, Session};
///
/// let session = Session::builder()
///     .username("alice")
///     .secret("hunter2")
///     .format("atom".parse::<Format>().unwrap())
///     .api_host(HostUrl::new("https://proxy.internal:8443").unwrap())
///     .build();
///
/// assert_eq!(session.format(), Format::Atom);
/// ```
#[derive(Debug, Default)]
pub struct SessionBuilder {
    username: Option<String>,
    secret: Option<Secret>,
    format: Option<Format>,
    user_agent: Option<String>,
    base_path: Option<String>,
    api_host: Option<HostUrl>,
    search_host: Option<HostUrl>,
}

impl SessionBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Basic-auth username.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the Basic-auth password.
    #[must_use]
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(Secret::new(secret));
        self
    }

    /// Sets the output format (default: [`Format::Json`]).
    #[must_use]
    pub const fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the User-Agent header value.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a base path prefixed to every resource chain.
    #[must_use]
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = normalize_base_path(base_path.into());
        self
    }

    /// Overrides the versioned-API host (proxies, tests).
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Overrides the search host (proxies, tests).
    #[must_use]
    pub fn search_host(mut self, host: HostUrl) -> Self {
        self.search_host = Some(host);
        self
    }

    /// Builds the [`Session`].
    ///
    /// # Panics
    ///
    /// Does not panic: the default host constants are valid by construction.
    #[must_use]
    pub fn build(self) -> Session {
        Session {
            username: self.username,
            secret: self.secret,
            format: self.format.unwrap_or_default(),
            user_agent: self.user_agent,
            base_path: self.base_path,
            api_host: self
                .api_host
                .unwrap_or_else(|| HostUrl::new(DEFAULT_API_HOST).expect("default api host")),
            search_host: self
                .search_host
                .unwrap_or_else(|| HostUrl::new(DEFAULT_SEARCH_HOST).expect("default search host")),
        }
    }
}
