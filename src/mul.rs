//! The [`Multiply`] trait: the kernel's only connection to an actual
//! multiplication algorithm.
//!
//! Grounded on `ibig::mul`'s dispatch between `simple`/`karatsuba`/
//! `toom_3`/`ntt` by operand length: there, the library picks the
//! algorithm internally; here the choice is the caller's, expressed as
//! whichever type implements this trait. [`recip`](crate::recip) and
//! [`div`](crate::div) never multiply directly, they only ever go through
//! `Multiply`.

use crate::word::Word;

/// Caller-supplied large-integer multiplication.
///
/// `multiply_raw` reads `na` words from `a` and `nb` words from `b`
/// (little-endian digit order, base supplied out of band by the caller)
/// and writes their product, `na + nb` words, to `out`.
///
/// # Safety
/// - `a` must be valid to read for `na` words, `b` for `nb` words, `out`
///   valid to read and write for `na + nb` words.
/// - `a` and `b` are never the same starting address.
/// - `out` may start at the same address as `a` or as `b` (the kernel
///   relies on this to avoid a temporary it has no scratch budget for);
///   any other overlap between `a`, `b`, and `out` does not occur.
///
/// A safe `&[Word]`/`&mut [Word]` signature cannot express "`out` may
/// start where `a` does" to the borrow checker, since a live shared and
/// mutable borrow of overlapping memory can't coexist — hence raw
/// pointers, the same way the callback this trait replaces took a plain
/// `void *userdata` plus three pointers and a documented aliasing rule.
pub trait Multiply {
    /// Reported by a multiplication that cannot complete, e.g. an
    /// allocation failure inside a Karatsuba/Toom/FFT implementation.
    type Error;

    /// # Safety
    /// See the trait-level documentation.
    unsafe fn multiply_raw(
        &mut self,
        a: *const Word,
        na: usize,
        b: *const Word,
        nb: usize,
        out: *mut Word,
    ) -> Result<(), Self::Error>;
}

#[cfg(feature = "std")]
mod simple {
    use super::Multiply;
    use crate::word::{extend, Word};
    use std::vec;

    /// Schoolbook `Multiply` reference implementation, used by this crate's
    /// own tests, benchmarks, and demo binary the way `ibig::mul::simple`
    /// is the baseline its own Karatsuba/Toom stages fall back to below
    /// their length thresholds.
    ///
    /// Quadratic, but correct under arbitrary aliasing: every call builds
    /// the product in an owned buffer before writing `out`, so it never
    /// reads a stale value through an alias it has already overwritten.
    /// Callers with real throughput needs supply their own `Multiply` impl
    /// (Karatsuba, Toom-3, NTT...), the same way they would plug in any of
    /// `ibig`'s internal strategies.
    #[derive(Clone, Copy, Debug)]
    pub struct SimpleMultiplier {
        base: Word,
    }

    impl SimpleMultiplier {
        pub fn new(base: Word) -> Self {
            SimpleMultiplier { base }
        }
    }

    impl Multiply for SimpleMultiplier {
        type Error = core::convert::Infallible;

        unsafe fn multiply_raw(
            &mut self,
            a: *const Word,
            na: usize,
            b: *const Word,
            nb: usize,
            out: *mut Word,
        ) -> Result<(), Self::Error> {
            // SAFETY: the caller (recip/div) upholds the trait's aliasing
            // and length contract.
            let a = core::slice::from_raw_parts(a, na);
            let b = core::slice::from_raw_parts(b, nb);

            let mut product = vec![0 as Word; na + nb];
            for (i, &bd) in b.iter().enumerate() {
                if bd == 0 {
                    continue;
                }
                let mut carry: Word = 0;
                for (j, &ad) in a.iter().enumerate() {
                    let v = extend(ad) * extend(bd) + extend(product[i + j]) + extend(carry);
                    product[i + j] = (v % extend(self.base)) as Word;
                    carry = (v / extend(self.base)) as Word;
                }
                let mut k = i + a.len();
                while carry != 0 {
                    let v = extend(product[k]) + extend(carry);
                    product[k] = (v % extend(self.base)) as Word;
                    carry = (v / extend(self.base)) as Word;
                    k += 1;
                }
            }

            // SAFETY: `out` is valid for `na + nb` writes per the trait
            // contract; `product` was built without reading through `out`.
            let out = core::slice::from_raw_parts_mut(out, na + nb);
            out.copy_from_slice(&product);
            Ok(())
        }
    }
}

#[cfg(feature = "std")]
pub use simple::SimpleMultiplier;
