//! Responder API library.
//!
//! Exposes the axum-facing pieces (config, state, envelope emission, failure
//! reporting, content negotiation, routes) so integration tests and the
//! binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod middleware;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
