//! Service layer for activity-log
//!
//! Centralizes the upload/search workflow between HTTP/CLI handlers and the
//! embedding client and activity store.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]

mod activity_service;
mod error;

pub use activity_service::ActivityService;
pub use error::ServiceError;
