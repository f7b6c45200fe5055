//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → middleware/size_gate.rs (check declared Content-Length)
//!     → either 413 rejection, or the rest of the host chain
//! ```

pub mod middleware;

pub use middleware::size_gate::{install, size_gate};
