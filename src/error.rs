//! Error types.

use core::fmt::{self, Display, Formatter};

/// A requested scratch size would overflow `usize`.
///
/// Returned by [`crate::inv_scratch_size`] and [`crate::div_scratch_size`]
/// when the inputs are too large for any buffer to hold; callers should
/// treat this as "refuse to proceed", not attempt a partial computation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScratchOverflow;

impl Display for ScratchOverflow {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("requested scratch size overflows usize")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ScratchOverflow {}
