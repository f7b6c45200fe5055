//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → SizeLimitConfig (immutable)
//!     → handed to install() by the chain assembler
//! ```
//!
//! # Design Decisions
//! - Config is immutable once constructed; it is a plain Copy value
//! - All fields have defaults to allow minimal configs
//! - Zero or negative limit means the check is disabled

pub mod loader;
pub mod schema;

pub use schema::SizeLimitConfig;
