//! Loading from raw sample pointers (FFI edge)

use std::slice;

use crate::error::BufferError;
use crate::vector::{Sample, SampleVector};

/// Load from a raw pointer and an explicit element count
///
/// `count` is the number of samples readable at `source`. It is passed
/// explicitly because a pointer carries no length. The copy itself follows
/// [`super::load`]: exactly `destination.length()` samples, rejected when
/// `count` is smaller.
///
/// # Safety
///
/// Unless `source` is null, it must point to `count` initialized, properly
/// aligned samples that stay valid and unmodified for the duration of the call.
///
/// # Errors
///
/// `BufferError::NullPointer` for a null `source`, otherwise as [`super::load`].
pub unsafe fn load_raw<V>(
    destination: &mut V,
    source: *const Sample,
    count: usize,
) -> Result<(), BufferError>
where
    V: SampleVector + ?Sized,
{
    if source.is_null() {
        return Err(BufferError::NullPointer);
    }
    let source = slice::from_raw_parts(source, count);
    super::load(destination, source)
}
