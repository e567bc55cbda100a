use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use responder_core::envelope::Envelope;
use responder_core::error::ApiError;
use responder_core::types::FALLBACK_ERROR_STATUS;
use serde_json::Value;

use crate::response::emit;

/// Detail sent to the caller when an internal error is converted with `?`.
pub const INTERNAL_DETAIL: &str = "An internal error occurred";

/// A reported failure that aborts the current request.
///
/// Returning a `Failure` from a handler or middleware short-circuits the
/// chain: the body becomes a fresh envelope holding exactly this one error,
/// sent with the error's status. The underlying cause, if any, only ever
/// reaches the server log.
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct Failure {
    error: ApiError,
    diagnostic: Option<Diagnostic>,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, Failure>;

/// Server-side record of why a request failed. Never serialized.
#[derive(Debug)]
struct Diagnostic {
    error_id: String,
    code: u16,
    cause: anyhow::Error,
}

impl Diagnostic {
    fn log(&self) {
        tracing::error!(
            error_id = %self.error_id,
            code = self.code,
            cause = %format_args!("{:#}", self.cause),
            "Request failed"
        );
    }
}

/// Build a [`Failure`] for `code`.
///
/// - A zero `code` becomes `500 Internal Server Error`.
/// - The title is the canonical reason phrase for `code`, empty when unknown.
/// - The transport status is `code` when it is a valid HTTP status, else 500.
/// - `cause` is kept for logging only.
pub fn fail(code: u16, detail: impl Into<Value>, cause: Option<anyhow::Error>) -> Failure {
    let code = if code == 0 { FALLBACK_ERROR_STATUS } else { code };
    let status = StatusCode::from_u16(code)
        .map(|s| s.as_u16())
        .unwrap_or(FALLBACK_ERROR_STATUS);

    let error = ApiError::new(code, status_title(code), detail).with_status(status);
    let failure = Failure {
        error,
        diagnostic: None,
    };

    match cause {
        Some(cause) => failure.with_cause(cause),
        None => failure,
    }
}

/// Canonical reason phrase for `code`, or `""` when it has none.
pub fn status_title(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("")
}

impl Failure {
    /// Failure without an underlying cause.
    pub fn new(code: u16, detail: impl Into<Value>) -> Self {
        fail(code, detail, None)
    }

    /// Attach the internal error that led to this failure.
    pub fn with_cause(mut self, cause: impl Into<anyhow::Error>) -> Self {
        self.diagnostic = Some(Diagnostic {
            error_id: self.error.id.clone(),
            code: self.error.code,
            cause: cause.into(),
        });
        self
    }

    /// The error as it will appear on the wire.
    pub fn error(&self) -> &ApiError {
        &self.error
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn has_cause(&self) -> bool {
        self.diagnostic.is_some()
    }
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        fail(
            StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            INTERNAL_DETAIL,
            Some(err),
        )
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        if let Some(diagnostic) = &self.diagnostic {
            diagnostic.log();
        }

        let mut envelope: Envelope = Envelope::new();
        envelope.set_status(self.error.status);
        envelope.add_error(self.error);
        emit(envelope)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLog {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn render(failure: Failure) -> (Response, String) {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let response = tracing::subscriber::with_default(subscriber, || failure.into_response());
        (response, log.contents())
    }

    #[test]
    fn zero_code_becomes_internal_server_error() {
        let failure = fail(0, "oops", None);

        assert_eq!(failure.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(failure.error().code, 500);
        assert_eq!(failure.error().status, 500);
        assert_eq!(failure.error().title, "Internal Server Error");
        assert_eq!(failure.error().detail, Some(Value::from("oops")));
    }

    #[test]
    fn unknown_status_gets_empty_title() {
        let failure = fail(599, "custom", None);

        assert_eq!(failure.error().code, 599);
        assert_eq!(failure.status().as_u16(), 599);
        assert_eq!(failure.error().title, "");
    }

    #[test]
    fn out_of_range_code_is_sent_as_500() {
        let failure = fail(42, "application code", None);

        assert_eq!(failure.error().code, 42);
        assert_eq!(failure.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(failure.error().title, "");
    }

    #[test]
    fn cause_is_logged_with_error_id() {
        let failure = fail(0, "oops", Some(anyhow::anyhow!("disk on fire")));
        let id = failure.error().id.clone();

        let (response, log) = render(failure);

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(log.contains("disk on fire"), "log was: {log}");
        assert!(log.contains(&id), "log was: {log}");
    }

    #[test]
    fn nothing_is_logged_without_cause() {
        let (response, log) = render(Failure::new(404, "missing"));

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(log.is_empty(), "log was: {log}");
    }

    #[test]
    fn anyhow_errors_convert_to_sanitized_500() {
        let failure: Failure = anyhow::anyhow!("password=hunter2").into();

        assert!(failure.has_cause());
        assert_eq!(failure.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(failure.error().detail, Some(Value::from(INTERNAL_DETAIL)));
    }

    #[test]
    fn display_is_the_title() {
        assert_eq!(Failure::new(415, "x").to_string(), "Unsupported Media Type");
    }
}
