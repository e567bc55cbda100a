//! Uniform response envelope.
//!
//! Every API response is shaped as
//!
//! ```text
//! { "links": {...}, "errors": [...], "meta": ..., "data": ..., "messages": [...] }
//! ```
//!
//! with each member omitted entirely when it is absent, empty, or `null`. The
//! transport status travels alongside the body but is never serialized.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::ser::is_absent;
use crate::types::{Links, DEFAULT_STATUS};

/// Response envelope with a typed `data` payload and `meta` block.
///
/// Both default to [`serde_json::Value`] for handlers that build ad-hoc
/// payloads.
///
/// # Example
///
/// ```
/// use responder_core::envelope::Envelope;
///
/// let mut envelope: Envelope<Vec<u32>> = Envelope::with_data(vec![1, 2, 3]);
/// envelope.add_link("self", "/items");
/// envelope.add_message("3 items");
///
/// assert_eq!(envelope.status(), 200);
/// assert_eq!(
///     serde_json::to_string(&envelope).unwrap(),
///     r#"{"links":{"self":"/items"},"data":[1,2,3],"messages":["3 items"]}"#,
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<D = Value, M = Value> {
    #[serde(skip)]
    status: Option<u16>,

    #[serde(default, skip_serializing_if = "links_empty")]
    pub links: Option<Links>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiError>,

    #[serde(skip_serializing_if = "is_absent")]
    pub meta: Option<M>,

    #[serde(skip_serializing_if = "is_absent")]
    pub data: Option<D>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
}

impl<D, M> Envelope<D, M> {
    pub fn new() -> Self {
        Self {
            status: None,
            links: None,
            errors: Vec::new(),
            meta: None,
            data: None,
            messages: Vec::new(),
        }
    }

    pub fn with_data(data: D) -> Self {
        let mut envelope = Self::new();
        envelope.set_data(data);
        envelope
    }

    /// Effective transport status: the explicit one, or `200` when unset or zero.
    pub fn status(&self) -> u16 {
        match self.status {
            Some(code) if code != 0 => code,
            _ => DEFAULT_STATUS,
        }
    }

    pub fn set_status(&mut self, status: u16) {
        self.status = Some(status);
    }

    /// Replace the data payload. Only the last value is kept.
    pub fn set_data(&mut self, data: D) {
        self.data = Some(data);
    }

    pub fn set_meta(&mut self, meta: M) {
        self.meta = Some(meta);
    }

    pub fn add_error(&mut self, error: ApiError) {
        self.errors.push(error);
    }

    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Insert or overwrite the link stored under `title`.
    pub fn add_link(&mut self, title: impl Into<String>, url: impl Into<String>) {
        self.links
            .get_or_insert_with(Links::new)
            .insert(title.into(), url.into());
    }

    /// Whether the envelope carries at least one error.
    ///
    /// Nothing prevents `data` from being set alongside errors; callers
    /// pick one interpretation per response.
    pub fn is_error(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl<D, M> Default for Envelope<D, M> {
    fn default() -> Self {
        Self::new()
    }
}

fn links_empty(links: &Option<Links>) -> bool {
    links.as_ref().map_or(true, |l| l.is_empty())
}
