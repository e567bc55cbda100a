//! Request middleware.
//!
//! - [`negotiate::negotiate_content_type`] -- rejects requests whose
//!   `Content-Type` / `Accept` do not match the configured media type.

pub mod negotiate;
