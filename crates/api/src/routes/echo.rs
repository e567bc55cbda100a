use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use responder_core::envelope::Envelope;
use serde_json::Value;

use crate::error::{fail, AppResult};
use crate::response::Reply;
use crate::state::AppState;

/// GET /echo -- a message-only envelope.
async fn greet() -> Reply {
    let mut envelope = Envelope::new();
    envelope.add_message("Send a JSON body with POST to have it echoed back");
    envelope.add_link("self", "/api/v1/echo");
    Reply(envelope)
}

/// POST /echo -- return the request body as `data` with `201 Created`.
async fn echo(body: Result<Json<Value>, JsonRejection>) -> AppResult<Reply> {
    let Json(body) = body.map_err(|rejection| {
        fail(
            StatusCode::BAD_REQUEST.as_u16(),
            rejection.body_text(),
            None,
        )
    })?;

    let mut envelope = Envelope::with_data(body);
    envelope.set_status(StatusCode::CREATED.as_u16());
    envelope.add_link("self", "/api/v1/echo");
    Ok(Reply(envelope))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/echo", get(greet).post(echo))
}
