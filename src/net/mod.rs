//! Network layer: error taxonomy, transport, wire types and endpoint
//! wrappers for the campus API.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
