//! Transport-independent response envelope model.
//!
//! - [`envelope::Envelope`] -- the uniform `{ links, errors, meta, data, messages }` wrapper.
//! - [`error::ApiError`] -- a single reported error carried inside an envelope.
//! - [`types::Links`] -- title → URL map shared by both.

pub mod envelope;
pub mod error;
mod ser;
pub mod types;
