//! Configuration parameters for buffer loading

use serde::{Deserialize, Serialize};

/// How a source's length is checked against the destination's logical length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceLengthPolicy {
    /// Source must hold at least `length` samples; the rest is never read
    AtLeast,
    /// Source must hold exactly `length` samples
    Exact,
}

/// Loader configuration parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Source length policy (default: AtLeast)
    pub source_length: SourceLengthPolicy,

    /// Window size used when buffers are built from a config (default: 512)
    pub default_window_size: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            source_length: SourceLengthPolicy::AtLeast,
            default_window_size: 512,
        }
    }
}
