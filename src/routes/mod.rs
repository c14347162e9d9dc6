//! Route-level concerns: guard decisions and well-known paths.

pub mod guard;

/// Where unauthenticated visitors are sent.
pub const LOGIN_ROUTE: &str = "/login";

/// Where authenticated visitors lacking a required role are sent.
pub const DENIED_ROUTE: &str = "/denied";

/// Fallback view for 5xx responses; the [`crate::net::http::Navigator`]
/// implementation is expected to land here.
pub const SERVER_ERROR_ROUTE: &str = "/500";
