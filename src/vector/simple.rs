//! Real-valued sample vector (aubio fvec)

use crate::config::LoaderConfig;
use crate::error::BufferError;
use crate::loader;

use super::{checked_length, read_slot, write_slot, Sample, SampleVector};

/// Fixed-length buffer of single precision samples
///
/// The working buffer of an analysis pipeline: a hop of input audio, or the
/// output of a processing stage. Storage is zero-filled at construction and
/// released on drop.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleBuffer {
    data: Vec<Sample>,
}

impl SimpleBuffer {
    /// Create a zero-filled buffer of `length` samples
    ///
    /// # Errors
    ///
    /// `BufferError::InvalidInput` if `length` is zero.
    pub fn new(length: usize) -> Result<Self, BufferError> {
        let length = checked_length(length, "Sample buffer")?;
        log::trace!("Allocating sample buffer of {} samples", length);
        Ok(Self {
            data: vec![0.0; length],
        })
    }

    /// Create a buffer of `length` samples loaded from `data`
    ///
    /// `data` must hold at least `length` samples.
    pub fn with_data(length: usize, data: &[Sample]) -> Result<Self, BufferError> {
        let mut buffer = Self::new(length)?;
        loader::load(&mut buffer, data)?;
        Ok(buffer)
    }

    /// Create a zero-filled buffer sized to `config.default_window_size`
    pub fn from_config(config: &LoaderConfig) -> Result<Self, BufferError> {
        Self::new(config.default_window_size)
    }

    /// Overwrite the buffer from double precision data
    pub fn set_data(&mut self, data: &[f64]) -> Result<(), BufferError> {
        loader::load_converted(self, data)
    }

    /// Overwrite the buffer from single precision data
    pub fn set_data_f32(&mut self, data: &[f32]) -> Result<(), BufferError> {
        loader::load(self, data)
    }

    /// Number of samples
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Sample at `index`
    pub fn get(&self, index: usize) -> Result<Sample, BufferError> {
        read_slot(&self.data, index)
    }

    /// Set the sample at `index`
    pub fn set(&mut self, index: usize, value: Sample) -> Result<(), BufferError> {
        write_slot(&mut self.data, index, value)
    }

    /// Set every sample to `value`
    pub fn fill(&mut self, value: Sample) {
        self.data.fill(value);
    }

    /// Set every sample to zero
    pub fn zeros(&mut self) {
        self.fill(0.0);
    }

    /// Borrow the samples
    pub fn as_slice(&self) -> &[Sample] {
        &self.data
    }

    /// Copy the samples out, widened to `f64`
    ///
    /// The copy stays valid after the buffer is overwritten.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.iter().map(|&s| s as f64).collect()
    }
}

impl SampleVector for SimpleBuffer {
    fn length(&self) -> usize {
        self.data.len()
    }

    fn get_sample(&self, index: usize) -> Result<Sample, BufferError> {
        self.get(index)
    }

    fn set_sample(&mut self, index: usize, value: Sample) -> Result<(), BufferError> {
        self.set(index, value)
    }
}
