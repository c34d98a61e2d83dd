//! HTTP request handlers.
//!
//! Handlers are thin: extract, delegate to a service, map errors to
//! `HttpError`.

pub mod hotels;
pub mod search;
