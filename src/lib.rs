//! # Twitter API Rust client
//!
//! A minimalist client for the Twitter REST API, exposing API resources
//! through a generic path-builder-and-dispatch mechanism instead of
//! hand-written per-endpoint methods.
//!
//! ## Overview
//!
//! This crate provides:
//! - An immutable [`Session`] holding credentials, output [`Format`], and
//!   User-Agent, built with [`SessionBuilder`]
//! - A [`Client`] that derives cheap, immutable [`Resource`] path handles
//! - A dispatcher translating any resource chain plus a terminal call into
//!   one HTTP request (verb from the call name, `id` spliced into the path,
//!   search routed to its own host)
//! - Response decoding into a [`Payload`] and structured [`ApiError`]s
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use twitter_api::{Client, Params, Session};
//!
//! // Public (unauthenticated) calls.
//! let twitter = Client::new(Session::default());
//!
//! // Get the public timeline.
//! let entries = twitter
//!     .resource("statuses")
//!     .call("public_timeline", Params::new())
//!     .await?;
//!
//! // Search.
//! let results = twitter.call("search", Params::new().param("q", "foo")).await?;
//! ```
//!
//! ## Authenticated calls
//!
//! ```rust,ignore
//! use twitter_api::{Client, Params, Session};
//!
//! let twitter = Client::new(
//!     Session::builder().username("username").secret("password").build(),
//! );
//!
//! // Get page two of the user's followers.
//! let entries = twitter
//!     .resource("statuses")
//!     .call("followers", Params::new().param("page", 2))
//!     .await?;
//!
//! // Send a direct message.
//! twitter
//!     .resource("direct_messages")
//!     .call("new", Params::new().param("user", 12345).param("text", "foo"))
//!     .await?;
//!
//! // Delete a status: the id argument moves into the URL path.
//! twitter
//!     .resource("statuses")
//!     .call("destroy", Params::new().param("id", 42))
//!     .await?;
//! ```
//!
//! ## Output formats
//!
//! JSON responses are parsed into [`serde_json::Value`]; XML, RSS, and Atom
//! come back as raw text:
//!
//! ```rust
//! use twitter_api::{ConfigError, Format, Session};
//!
//! let session = Session::builder()
//!     .format("rss".parse::<Format>().unwrap())
//!     .build();
//! assert_eq!(session.format(), Format::Rss);
//!
//! // Unsupported formats fail before a client can exist.
//! assert!(matches!(
//!     "yaml".parse::<Format>(),
//!     Err(ConfigError::UnsupportedFormat { .. })
//! ));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Immutable sessions**: `with_*` methods derive new sessions, they never
//!   mutate shared state
//! - **Thread-safe**: [`Client`] and [`Session`] are `Send + Sync`
//! - **One call, one request**: no retries, no scheduling, no recovery —
//!   every failure surfaces to the caller as a structured error

pub mod client;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use client::{
    decode, ApiError, Client, Method, ParamValue, Params, Payload, Request, Resource,
    ResponseError, MUTATING_CALLS,
};
pub use config::{
    Format, HostUrl, Secret, Session, SessionBuilder, API_VERSION, DEFAULT_API_HOST,
    DEFAULT_SEARCH_HOST,
};
pub use error::ConfigError;
