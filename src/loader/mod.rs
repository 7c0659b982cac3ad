//! Buffer loader
//!
//! Copies caller-owned samples into a fixed-length [`SampleVector`]. The number
//! of samples copied is always the destination's logical length: a source is a
//! length-carrying slice, and its own length is only ever used to reject
//! sources that are too short.
//!
//! # Example
//!
//! ```
//! use stratum_buffers::loader::load;
//! use stratum_buffers::vector::simple::SimpleBuffer;
//!
//! let mut buffer = SimpleBuffer::new(4)?;
//! load(&mut buffer, &[0.0, -1.0, 2.5, 100.0])?;
//! assert_eq!(buffer.as_slice(), &[0.0, -1.0, 2.5, 100.0]);
//! # Ok::<(), stratum_buffers::BufferError>(())
//! ```

pub mod raw;

use crate::config::{LoaderConfig, SourceLengthPolicy};
use crate::error::BufferError;
use crate::vector::{Sample, SampleVector};

pub use raw::load_raw;

/// Conversion of a caller sample format into [`Sample`]
pub trait IntoSample: Copy {
    /// Convert to a single precision sample
    fn into_sample(self) -> Sample;
}

impl IntoSample for f32 {
    #[inline]
    fn into_sample(self) -> Sample {
        self
    }
}

impl IntoSample for f64 {
    /// Narrowing conversion, rounds to nearest
    #[inline]
    fn into_sample(self) -> Sample {
        self as Sample
    }
}

impl IntoSample for i16 {
    /// Scales 16-bit PCM into [-1.0, 1.0)
    #[inline]
    fn into_sample(self) -> Sample {
        self as Sample / 32768.0
    }
}

/// Copy `destination.length()` samples from `source` into `destination`
///
/// For every `i` in `0..destination.length()`, `destination[i] = source[i]`.
/// Prior contents are overwritten; the destination's length is unchanged.
/// Samples in `source` past the destination's length are never read.
///
/// # Errors
///
/// Returns `BufferError::ShortSource` if `source` holds fewer samples than
/// the destination. Nothing is written in that case.
pub fn load<V>(destination: &mut V, source: &[Sample]) -> Result<(), BufferError>
where
    V: SampleVector + ?Sized,
{
    load_converted(destination, source)
}

/// Like [`load`], converting each source element with [`IntoSample`]
///
/// Loads `f64` data (narrowed) or 16-bit PCM (scaled) without an intermediate
/// allocation.
pub fn load_converted<V, T>(destination: &mut V, source: &[T]) -> Result<(), BufferError>
where
    V: SampleVector + ?Sized,
    T: IntoSample,
{
    let source = bounded_source(source, destination.length())?;
    for (index, &sample) in source.iter().enumerate() {
        destination.set_sample(index, sample.into_sample())?;
    }
    Ok(())
}

/// Like [`load`], applying the source length policy from `config`
///
/// # Errors
///
/// In addition to the errors of [`load`], returns
/// `BufferError::TrailingSamples` under `SourceLengthPolicy::Exact` when the
/// source is longer than the destination.
pub fn load_with_config<V>(
    destination: &mut V,
    source: &[Sample],
    config: &LoaderConfig,
) -> Result<(), BufferError>
where
    V: SampleVector + ?Sized,
{
    let expected = destination.length();
    if config.source_length == SourceLengthPolicy::Exact && source.len() > expected {
        log::debug!(
            "Rejecting load: {} samples for vector of length {}",
            source.len(),
            expected
        );
        return Err(BufferError::TrailingSamples {
            expected,
            available: source.len(),
        });
    }
    load(destination, source)
}

/// Prefix of `source` holding exactly `length` samples
pub(crate) fn bounded_source<T>(source: &[T], length: usize) -> Result<&[T], BufferError> {
    match source.get(..length) {
        Some(prefix) => Ok(prefix),
        None => {
            log::debug!(
                "Rejecting load: {} samples required, {} available",
                length,
                source.len()
            );
            Err(BufferError::ShortSource {
                required: length,
                available: source.len(),
            })
        }
    }
}
