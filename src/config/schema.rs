//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Size limit for incoming request bodies.
///
/// Read-only after construction and safe for unsynchronized concurrent
/// reads across all in-flight requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SizeLimitConfig {
    /// Maximum declared body size in bytes.
    /// Zero or negative disables the check.
    pub content_length_limit: i64,
}

impl Default for SizeLimitConfig {
    fn default() -> Self {
        Self {
            content_length_limit: 2 * 1024 * 1024, // 2MB
        }
    }
}

impl SizeLimitConfig {
    /// Create a config with the given limit in bytes.
    pub fn new(content_length_limit: i64) -> Self {
        Self {
            content_length_limit,
        }
    }

    /// Whether the limit is active.
    pub fn is_enabled(&self) -> bool {
        self.content_length_limit > 0
    }
}
