//! Blank item API server library.
//!
//! Exposes the building blocks (config, state, draft sessions, error
//! handling, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod config;
pub mod drafts;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
