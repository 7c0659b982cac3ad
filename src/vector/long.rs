//! Double precision sample vector (aubio lvec)

use crate::error::BufferError;
use crate::loader::bounded_source;

use super::{checked_length, read_slot, write_slot, LongSample};

/// Fixed-length buffer of double precision samples
#[derive(Debug, Clone, PartialEq)]
pub struct LongSampleBuffer {
    data: Vec<LongSample>,
}

impl LongSampleBuffer {
    /// Create a zero-filled buffer of `length` samples
    pub fn new(length: usize) -> Result<Self, BufferError> {
        let length = checked_length(length, "Long sample buffer")?;
        log::trace!("Allocating long sample buffer of {} samples", length);
        Ok(Self {
            data: vec![0.0; length],
        })
    }

    /// Overwrite the buffer from `data`
    ///
    /// Copies exactly `size()` samples; `data` must hold at least that many.
    pub fn set_data(&mut self, data: &[LongSample]) -> Result<(), BufferError> {
        let source = bounded_source(data, self.data.len())?;
        self.data.copy_from_slice(source);
        Ok(())
    }

    /// Number of samples
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Sample at `index`
    pub fn get(&self, index: usize) -> Result<LongSample, BufferError> {
        read_slot(&self.data, index)
    }

    /// Set the sample at `index`
    pub fn set(&mut self, index: usize, value: LongSample) -> Result<(), BufferError> {
        write_slot(&mut self.data, index, value)
    }

    /// Borrow the samples
    pub fn as_slice(&self) -> &[LongSample] {
        &self.data
    }

    /// Copy the samples out
    pub fn to_vec(&self) -> Vec<LongSample> {
        self.data.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_data_keeps_precision() {
        let mut buffer = LongSampleBuffer::new(2).unwrap();
        buffer.set_data(&[0.1, 1.0e-300]).unwrap();
        assert_eq!(buffer.to_vec(), vec![0.1, 1.0e-300]);
    }

    #[test]
    fn test_set_data_short_source() {
        let mut buffer = LongSampleBuffer::new(4).unwrap();
        buffer.set(0, 9.0).unwrap();
        assert_eq!(
            buffer.set_data(&[1.0, 2.0]),
            Err(BufferError::ShortSource {
                required: 4,
                available: 2
            })
        );
        assert_eq!(buffer.get(0).unwrap(), 9.0);
    }

    #[test]
    fn test_zero_length_rejected() {
        assert!(LongSampleBuffer::new(0).is_err());
    }
}
