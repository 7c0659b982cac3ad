//! Spectral vector in polar form (aubio cvec)
//!
//! A window of `N` real samples has `N / 2 + 1` spectral bins. The norm and
//! phase halves each hold that many samples.

use crate::config::LoaderConfig;
use crate::error::BufferError;
use crate::loader;

use super::{checked_length, Sample, VectorView};

/// Norm and phase buffers for one spectral frame
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexBuffer {
    norm: Vec<Sample>,
    phase: Vec<Sample>,
}

impl ComplexBuffer {
    /// Create a zero-filled buffer for a window of `window_size` samples
    ///
    /// # Errors
    ///
    /// `BufferError::InvalidInput` if `window_size` is zero.
    pub fn new(window_size: usize) -> Result<Self, BufferError> {
        let window_size = checked_length(window_size, "Complex buffer window")?;
        let bins = window_size / 2 + 1;
        log::trace!(
            "Allocating complex buffer of {} bins (window {})",
            bins,
            window_size
        );
        Ok(Self {
            norm: vec![0.0; bins],
            phase: vec![0.0; bins],
        })
    }

    /// Create a buffer with its norm half loaded from `data`
    pub fn with_norm(window_size: usize, data: &[Sample]) -> Result<Self, BufferError> {
        let mut buffer = Self::new(window_size)?;
        loader::load(&mut buffer.norm_mut(), data)?;
        Ok(buffer)
    }

    /// Create a zero-filled buffer for `config.default_window_size`
    pub fn from_config(config: &LoaderConfig) -> Result<Self, BufferError> {
        Self::new(config.default_window_size)
    }

    /// Number of bins in each half
    pub fn size(&self) -> usize {
        self.norm.len()
    }

    /// Copy of the norm half, widened to `f64`
    pub fn norm(&self) -> Vec<f64> {
        self.norm.iter().map(|&s| s as f64).collect()
    }

    /// Copy of the phase half, widened to `f64`
    pub fn phase(&self) -> Vec<f64> {
        self.phase.iter().map(|&s| s as f64).collect()
    }

    /// Writable view of the norm half
    pub fn norm_mut(&mut self) -> VectorView<'_> {
        VectorView::new(&mut self.norm)
    }

    /// Writable view of the phase half
    pub fn phase_mut(&mut self) -> VectorView<'_> {
        VectorView::new(&mut self.phase)
    }
}
