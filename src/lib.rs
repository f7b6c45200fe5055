//! Request size admission gate for axum handler chains.
//!
//! Inspects the declared `Content-Length` of an incoming request before any
//! application handler runs and rejects oversized requests with a structured
//! 413 response. The gate never reads the body; requests without a declared
//! length (e.g. chunked transfer) pass through unchanged.

pub mod config;
pub mod http;
pub mod observability;

pub use config::schema::SizeLimitConfig;
pub use http::middleware::size_gate::{install, size_gate};
