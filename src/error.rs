//! Error types for sample vectors and the buffer loader

use std::fmt;

/// Errors that can occur while constructing or loading sample vectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Invalid input parameters (zero lengths, mismatched channel counts, ...)
    InvalidInput(String),

    /// Source holds fewer samples than the destination's logical length
    ShortSource {
        /// Destination logical length
        required: usize,
        /// Samples available in the source
        available: usize,
    },

    /// Source holds more samples than the destination under an exact-length policy
    TrailingSamples {
        /// Destination logical length
        expected: usize,
        /// Samples available in the source
        available: usize,
    },

    /// Element index past the end of a vector
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Vector length
        length: usize,
    },

    /// Channel index past the height of a matrix
    ChannelOutOfBounds {
        /// Requested channel
        channel: usize,
        /// Matrix height
        height: usize,
    },

    /// Null source pointer passed across the FFI edge
    NullPointer,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            BufferError::ShortSource { required, available } => write!(
                f,
                "Short source: {} samples required, {} available",
                required, available
            ),
            BufferError::TrailingSamples { expected, available } => write!(
                f,
                "Trailing samples: expected exactly {} samples, got {}",
                expected, available
            ),
            BufferError::IndexOutOfBounds { index, length } => write!(
                f,
                "Index out of bounds: index {} on vector of length {}",
                index, length
            ),
            BufferError::ChannelOutOfBounds { channel, height } => write!(
                f,
                "Channel out of bounds: channel {} on matrix of height {}",
                channel, height
            ),
            BufferError::NullPointer => write!(f, "Null source pointer"),
        }
    }
}

impl std::error::Error for BufferError {}
