//! Writing envelopes onto the HTTP transport.
//!
//! All API responses use the [`Envelope`] shape. Handlers build one, then
//! hand it to [`emit`] (or return [`Reply`]) instead of assembling ad-hoc
//! `serde_json::json!` bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use responder_core::envelope::Envelope;
use serde::Serialize;

/// Serialize `envelope` as the JSON body with its effective status.
///
/// An unset status means `200 OK`. A status outside the HTTP range is
/// logged and sent as `500`.
pub fn emit<D: Serialize, M: Serialize>(envelope: Envelope<D, M>) -> Response {
    let code = envelope.status();
    let status = StatusCode::from_u16(code).unwrap_or_else(|_| {
        tracing::warn!(code, "Envelope status is not a valid HTTP status, sending 500");
        StatusCode::INTERNAL_SERVER_ERROR
    });

    (status, Json(envelope)).into_response()
}

/// Handler return type that emits the wrapped envelope.
///
/// ```ignore
/// async fn list() -> AppResult<Reply<Vec<Item>>> {
///     Ok(Reply(Envelope::with_data(items)))
/// }
/// ```
#[derive(Debug)]
pub struct Reply<D = serde_json::Value, M = serde_json::Value>(pub Envelope<D, M>);

impl<D: Serialize, M: Serialize> IntoResponse for Reply<D, M> {
    fn into_response(self) -> Response {
        emit(self.0)
    }
}

impl<D, M> From<Envelope<D, M>> for Reply<D, M> {
    fn from(envelope: Envelope<D, M>) -> Self {
        Self(envelope)
    }
}
