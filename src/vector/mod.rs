//! Fixed-length sample vectors
//!
//! Owned sample storage modelled on aubio's vector family:
//! - `SimpleBuffer` (fvec): real samples
//! - `LongSampleBuffer` (lvec): double precision samples
//! - `ComplexBuffer` (cvec): norm and phase halves of a spectrum
//! - `MatrixBuffer` (fmat): multi-channel real samples
//!
//! Every vector has a logical length fixed at construction. The buffer loader
//! only reaches storage through the [`SampleVector`] trait.

pub mod complex;
pub mod long;
pub mod matrix;
pub mod simple;

use crate::error::BufferError;

/// Single precision audio sample (aubio `smpl_t`)
pub type Sample = f32;

/// Double precision audio sample (aubio `lsmp_t`)
pub type LongSample = f64;

/// Fixed-length, mutable sequence of samples
///
/// The length reported by [`SampleVector::length`] is the vector's own element
/// count. It never changes over the lifetime of the vector.
pub trait SampleVector {
    /// Logical length (number of samples)
    fn length(&self) -> usize;

    /// Read the sample at `index`
    fn get_sample(&self, index: usize) -> Result<Sample, BufferError>;

    /// Write `value` at `index`
    fn set_sample(&mut self, index: usize, value: Sample) -> Result<(), BufferError>;
}

/// Mutable view over a run of samples owned by a larger buffer
///
/// Returned by [`matrix::MatrixBuffer::channel_mut`] and
/// [`complex::ComplexBuffer::norm_mut`] so the loader can fill sub-vectors.
#[derive(Debug)]
pub struct VectorView<'a> {
    data: &'a mut [Sample],
}

impl<'a> VectorView<'a> {
    pub(crate) fn new(data: &'a mut [Sample]) -> Self {
        Self { data }
    }

    /// Samples seen through this view
    pub fn as_slice(&self) -> &[Sample] {
        self.data
    }
}

impl SampleVector for VectorView<'_> {
    fn length(&self) -> usize {
        self.data.len()
    }

    fn get_sample(&self, index: usize) -> Result<Sample, BufferError> {
        read_slot(self.data, index)
    }

    fn set_sample(&mut self, index: usize, value: Sample) -> Result<(), BufferError> {
        write_slot(self.data, index, value)
    }
}

/// Reject zero lengths; aubio refuses to allocate them too
pub(crate) fn checked_length(length: usize, what: &str) -> Result<usize, BufferError> {
    if length == 0 {
        return Err(BufferError::InvalidInput(format!(
            "{} length must be positive",
            what
        )));
    }
    Ok(length)
}

pub(crate) fn read_slot<T: Copy>(data: &[T], index: usize) -> Result<T, BufferError> {
    data.get(index)
        .copied()
        .ok_or(BufferError::IndexOutOfBounds {
            index,
            length: data.len(),
        })
}

pub(crate) fn write_slot<T>(data: &mut [T], index: usize, value: T) -> Result<(), BufferError> {
    let length = data.len();
    match data.get_mut(index) {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(BufferError::IndexOutOfBounds { index, length }),
    }
}
