//! Multi-channel sample matrix (aubio fmat)

use crate::error::BufferError;
use crate::loader;

use super::{checked_length, Sample, VectorView};

/// `height` channels of `length` samples each, stored channel after channel
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixBuffer {
    height: usize,
    length: usize,
    data: Vec<Sample>,
}

impl MatrixBuffer {
    /// Create a zero-filled matrix
    ///
    /// # Arguments
    ///
    /// * `height` - Number of channels
    /// * `length` - Samples per channel
    ///
    /// # Errors
    ///
    /// `BufferError::InvalidInput` if either dimension is zero.
    pub fn new(height: usize, length: usize) -> Result<Self, BufferError> {
        let height = checked_length(height, "Matrix height")?;
        let length = checked_length(length, "Matrix channel")?;
        let size = height.checked_mul(length).ok_or_else(|| {
            BufferError::InvalidInput(format!(
                "Matrix of {} x {} samples overflows",
                height, length
            ))
        })?;
        log::trace!("Allocating {} x {} sample matrix", height, length);
        Ok(Self {
            height,
            length,
            data: vec![0.0; size],
        })
    }

    /// Number of channels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Samples per channel
    pub fn length(&self) -> usize {
        self.length
    }

    /// Total number of samples
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Sample `index` of `channel`
    pub fn get(&self, channel: usize, index: usize) -> Result<Sample, BufferError> {
        let range = self.channel_range(channel)?;
        super::read_slot(&self.data[range], index)
    }

    /// Set sample `index` of `channel`
    pub fn set(&mut self, channel: usize, index: usize, value: Sample) -> Result<(), BufferError> {
        let range = self.channel_range(channel)?;
        super::write_slot(&mut self.data[range], index, value)
    }

    /// Copy of one channel, widened to `f64`
    pub fn channel(&self, channel: usize) -> Result<Vec<f64>, BufferError> {
        let range = self.channel_range(channel)?;
        Ok(self.data[range].iter().map(|&s| s as f64).collect())
    }

    /// Copy of every channel, `channels()[c][i]` being sample `i` of channel `c`
    pub fn channels(&self) -> Vec<Vec<f64>> {
        self.data
            .chunks_exact(self.length)
            .map(|chunk| chunk.iter().map(|&s| s as f64).collect())
            .collect()
    }

    /// Writable view of one channel
    pub fn channel_mut(&mut self, channel: usize) -> Result<VectorView<'_>, BufferError> {
        let range = self.channel_range(channel)?;
        Ok(VectorView::new(&mut self.data[range]))
    }

    /// Load every channel from `sources`, one source per channel
    ///
    /// Each source must hold at least `length()` samples. Sources are checked
    /// before any channel is written.
    ///
    /// # Errors
    ///
    /// `BufferError::InvalidInput` if `sources.len() != height()`, or
    /// `BufferError::ShortSource` for the first source that is too short.
    pub fn load_channels(&mut self, sources: &[&[Sample]]) -> Result<(), BufferError> {
        if sources.len() != self.height {
            return Err(BufferError::InvalidInput(format!(
                "Expected {} channel sources, got {}",
                self.height,
                sources.len()
            )));
        }
        for &source in sources {
            loader::bounded_source(source, self.length)?;
        }
        for (chunk, &source) in self.data.chunks_exact_mut(self.length).zip(sources) {
            loader::load(&mut VectorView::new(chunk), source)?;
        }
        Ok(())
    }

    fn channel_range(&self, channel: usize) -> Result<std::ops::Range<usize>, BufferError> {
        if channel >= self.height {
            return Err(BufferError::ChannelOutOfBounds {
                channel,
                height: self.height,
            });
        }
        let start = channel * self.length;
        Ok(start..start + self.length)
    }
}
