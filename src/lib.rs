//! # campus-client
//!
//! Typed client core for the campus academic-management API: credential
//! storage, a bearer-authenticated transport with failure classification,
//! the reactive session gate, and the route guard the UI shell builds on.
//!
//! The crate is UI-agnostic. The host application constructs a
//! [`config::ClientConfig`], a [`store::CredentialStore`], a
//! [`net::http::Transport`] (with a [`net::http::Navigator`] that maps the
//! 5xx fallback to real navigation), and mounts a
//! [`state::session::SessionGate`] on top. Views subscribe to the gate's
//! session channel and feed its snapshots to [`routes::guard::route_decision`].

pub mod config;
pub mod net;
pub mod routes;
pub mod state;
pub mod store;

pub use config::ClientConfig;
pub use net::error::ApiError;
pub use net::http::{Navigator, Transport, UnauthorizedObserver};
pub use net::types::User;
pub use routes::guard::{RouteDecision, route_decision};
pub use state::session::{Session, SessionGate, SessionMount};
pub use store::CredentialStore;
