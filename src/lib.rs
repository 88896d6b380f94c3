// Copyright (c) 2020 Tomek Czajka
//
// Licensed under either of
//
// * Apache License, Version 2.0
//   (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)
// * MIT license
//   (LICENSE-MIT or https://opensource.org/licenses/MIT)
//
// at your option.
//
// Unless you explicitly state otherwise, any contribution intentionally submitted
// for inclusion in the work by you, as defined in the Apache-2.0 license, shall be
// dual licensed as above, without any additional terms or conditions.

//! A Newton-Raphson reciprocal and long-division kernel for arbitrary-radix,
//! arbitrary-precision unsigned integers.
//!
//! Big numbers here are plain little-endian spans of base-`B` digits
//! (`&[Word]`), where `B` is a runtime value rather than a type parameter.
//! The crate supplies no multiplication of its own; instead every entry
//! point is generic over a caller-provided [`Multiply`] implementation,
//! so a caller can plug in schoolbook, Karatsuba, Toom, or an FFT-based
//! strategy without this crate needing to know which. [`SimpleMultiplier`]
//! is a schoolbook reference implementation used by this crate's own
//! tests and benchmarks.
//!
//! ```
//! # #[cfg(feature = "std")] {
//! use newton_div::{div, div_scratch_size, SimpleMultiplier};
//!
//! let base: u64 = 1_000;
//! let y = [6, 5, 4, 3]; // 3_004_005_006 at base 1000, little-endian
//! let x = [0, 0, 0, 8, 2]; // 2*y*... any x with x.len() >= y.len()
//! let mut scratch = vec![0u64; div_scratch_size(x.len(), y.len()).unwrap()];
//! let mut mul = SimpleMultiplier::new(base);
//! div(&x, &y, base, &mut scratch, &mut mul).unwrap();
//! let nwx = x.len();
//! let nwy = y.len();
//! let quotient = &scratch[nwx + 1..2 * nwx - nwy + 2];
//! let product = &scratch[..nwx + 1];
//! assert_eq!(product[nwx], 0);
//! let _ = quotient;
//! # }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

mod digits;
mod div;
mod error;
mod mul;
mod recip;
mod scratch;
mod seed;
mod word;

/// Minimum divisor width, in words, accepted by [`inv`] and [`div`].
///
/// The seed computation needs the top 4 words of the divisor to form its
/// initial estimate; a divisor narrower than that has no room for a seed
/// and falls outside this kernel's contract entirely (a caller dividing by
/// something narrower should use ordinary schoolbook division instead).
pub const MIN_W: usize = 4;

pub use crate::{
    div::div,
    error::ScratchOverflow,
    mul::Multiply,
    scratch::{div_scratch_size, inv_scratch_size},
    word::{DoubleWord, Word},
};

#[cfg(feature = "std")]
pub use crate::mul::SimpleMultiplier;

pub use crate::recip::inv;
