//! Content negotiation against a single configured media type.
//!
//! - `GET` requests must send `Accept: */*` or the configured type (406 otherwise).
//! - Every other method must also send the configured `Content-Type` (415
//!   otherwise), checked before `Accept`.
//!
//! Comparison is ASCII case-insensitive on the raw header value. Media type
//! parameters are not parsed: `application/json; charset=utf-8` does not
//! match `application/json`.
//!
//! The read branch is picked by comparing the method name to `GET`
//! case-insensitively, so an extension method spelled `get` is treated as a
//! read rather than a write.

use axum::extract::{Request, State};
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::config::NegotiationConfig;
use crate::error::{status_title, Failure};
use crate::state::AppState;

const ANY_MEDIA_TYPE: &str = "*/*";

/// Axum middleware: run [`check_request`] and either continue or abort.
///
/// ```ignore
/// router.layer(axum::middleware::from_fn_with_state(state, negotiate_content_type))
/// ```
pub async fn negotiate_content_type(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match check_request(
        request.method(),
        request.headers(),
        &state.config.negotiation,
    ) {
        Ok(()) => next.run(request).await,
        Err(failure) => {
            tracing::debug!(
                method = %request.method(),
                uri = %request.uri(),
                status = %failure.status(),
                "Content negotiation rejected request"
            );
            failure.into_response()
        }
    }
}

/// Decide whether a request may proceed.
///
/// Missing or non-UTF-8 headers compare as empty strings and therefore fail.
pub fn check_request(
    method: &Method,
    headers: &HeaderMap,
    config: &NegotiationConfig,
) -> Result<(), Failure> {
    let accepted = config.content_type.as_str();

    let is_read = method.as_str().eq_ignore_ascii_case(Method::GET.as_str());

    if !is_read && !header_value(headers, &CONTENT_TYPE).eq_ignore_ascii_case(accepted) {
        return Err(rejection(StatusCode::UNSUPPORTED_MEDIA_TYPE));
    }

    let accept = header_value(headers, &ACCEPT);
    if accept != ANY_MEDIA_TYPE && !accept.eq_ignore_ascii_case(accepted) {
        return Err(rejection(StatusCode::NOT_ACCEPTABLE));
    }

    Ok(())
}

fn header_value<'a>(headers: &'a HeaderMap, name: &HeaderName) -> &'a str {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

fn rejection(status: StatusCode) -> Failure {
    let code = status.as_u16();
    Failure::new(code, status_title(code))
}
