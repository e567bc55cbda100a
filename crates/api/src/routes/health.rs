use axum::{routing::get, Router};
use responder_core::envelope::Envelope;
use serde::Serialize;

use crate::response::Reply;
use crate::state::AppState;

/// Health check payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- liveness probe, wrapped in the standard envelope.
async fn health_check() -> Reply<HealthResponse> {
    let mut envelope = Envelope::with_data(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    });
    envelope.add_link("self", "/health");
    Reply(envelope)
}

/// Mount health check routes (root level, not under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
