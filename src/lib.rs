//! # Stratum Buffers
//!
//! Fixed-length audio sample vectors and the buffer loader that fills them
//! from caller-owned sample data.
//!
//! ## Features
//!
//! - **Sample vectors**: real (`SimpleBuffer`), double precision
//!   (`LongSampleBuffer`), spectral norm/phase (`ComplexBuffer`) and
//!   multi-channel (`MatrixBuffer`) buffers with a length fixed at construction
//! - **Buffer loader**: copies exactly as many samples as the destination holds,
//!   rejecting sources that are too short instead of under-copying
//! - **FFI edge**: loading from a raw pointer with an explicit element count
//!
//! ## Quick Start
//!
//! ```
//! use stratum_buffers::{load, SimpleBuffer};
//!
//! let hop: Vec<f32> = (0..512).map(|i| (i as f32 * 0.01).sin()).collect();
//!
//! let mut buffer = SimpleBuffer::new(512)?;
//! load(&mut buffer, &hop)?;
//!
//! assert_eq!(buffer.as_slice(), hop.as_slice());
//! # Ok::<(), stratum_buffers::BufferError>(())
//! ```
//!
//! ## Architecture
//!
//! The loader only reaches storage through the [`SampleVector`] trait (length
//! query plus bounds-checked element access), so any vector type, including
//! views into a matrix channel or a spectral half, is loaded the same way.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod loader;
pub mod vector;

// Re-export main types
pub use config::{LoaderConfig, SourceLengthPolicy};
pub use error::BufferError;
pub use loader::{load, load_converted, load_raw, load_with_config, IntoSample};
pub use vector::complex::ComplexBuffer;
pub use vector::long::LongSampleBuffer;
pub use vector::matrix::MatrixBuffer;
pub use vector::simple::SimpleBuffer;
pub use vector::{LongSample, Sample, SampleVector, VectorView};
