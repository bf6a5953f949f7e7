//! API version constant.

/// The numeric API version segment inserted between host and path for
/// non-search requests (`https://api.twitter.com/1/...`).
///
/// Fixed per build. Search requests carry no version segment at all.
pub const API_VERSION: u32 = 1;
