use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::types::Links;

/// A single error reported to the caller inside an [`Envelope`](crate::envelope::Envelope).
///
/// Every instance gets a fresh time-ordered identifier at construction, so
/// log lines and client reports can be correlated. The transport `status` is
/// kept off the wire; `code` is the application-facing number and usually
/// equals it.
///
/// The underlying cause of a failure is deliberately absent: it is logged on
/// the server side and never becomes part of this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{title}")]
pub struct ApiError {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(skip)]
    pub status: u16,

    #[serde(default, skip_serializing_if = "is_zero")]
    pub code: u16,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl ApiError {
    /// Create an error whose transport status equals `code`.
    ///
    /// A `Value::Null` detail is treated as absent.
    pub fn new(code: u16, title: impl Into<String>, detail: impl Into<Value>) -> Self {
        let detail = match detail.into() {
            Value::Null => None,
            other => Some(other),
        };

        Self {
            id: Uuid::now_v7().to_string(),
            status: code,
            code,
            title: title.into(),
            detail,
            links: None,
        }
    }

    /// Override the transport status while keeping the application code.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Attach a link, creating the map on first use.
    pub fn with_link(mut self, title: impl Into<String>, url: impl Into<String>) -> Self {
        self.links
            .get_or_insert_with(Links::new)
            .insert(title.into(), url.into());
        self
    }
}

fn is_zero(value: &u16) -> bool {
    *value == 0
}
