//! The client layer: path handles, request dispatch, response decoding.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Client`]: owns the session and the HTTP transport, dispatches calls
//! - [`Resource`]: an immutable path handle built by chained `resource()` steps
//! - [`Request`]: the transient descriptor one dispatch derives and discards
//! - [`Params`]/[`ParamValue`]: the string/number argument mapping
//! - [`Payload`]: a decoded success body (parsed JSON or raw text)
//! - [`ApiError`]/[`ResponseError`]: everything a terminal call can raise
//!
//! # Dispatch rules
//!
//! A terminal call `m` on the chain `s1/../sn` with arguments `A`:
//!
//! - POST when `m` is one of `new`, `create`, `update`, `destroy`; else GET.
//! - Path `s1/../sn/m`, plus `/A[id]` when an `id` argument is present
//!   (removed from `A` before encoding).
//! - `m == "search"` routes to the search host with no version segment;
//!   everything else routes to the api host under the version segment.
//! - The session format appends `.json`/`.xml`/`.rss`/`.atom`.
//! - Remaining arguments: query string for GET, form body for POST, nothing
//!   at all when empty.

mod dispatch;
mod errors;
mod request;
mod resource;
mod response;

pub use dispatch::Client;
pub use errors::{ApiError, ResponseError};
pub use request::{Method, ParamValue, Params, Request, MUTATING_CALLS};
pub use resource::Resource;
pub use response::{decode, Payload};
