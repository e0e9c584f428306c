//! HTTP API
//!
//! The router exposes story generation plus generic document CRUD over the
//! known collections. Handlers are thin: they parse, call a port or use
//! case, and shape the JSON reply.

mod collections;
mod router;
mod stories;

pub use router::{AppState, create_router, serve};
