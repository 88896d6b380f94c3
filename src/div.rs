//! The division driver: quotient and product via a single reciprocal call
//! plus a bounded correction.
//!
//! Grounded on `decinewt_div` in the original C source: raise the
//! reciprocal iterator's precision just enough to cover `x`'s width, form
//! a candidate quotient by multiplying, nudge it optimistically by one,
//! and fall back by one more if that overshot. The arithmetic behind the
//! "nudge, then check" shape is the same one-sided error bound
//! [`crate::recip::inv`] maintains: the true quotient is always one of
//! two adjacent candidates.

use core::cmp::Ordering;

use crate::{digits, mul::Multiply, recip::inv, word::Word, MIN_W};

/// Divides `x` by `y`, writing the quotient and the product `q·y` into
/// `scratch`.
///
/// `y` must be normalized, at least [`MIN_W`](crate::MIN_W) words wide,
/// and `x` at least as wide as `y`. `scratch` must have length at least
/// [`div_scratch_size(x.len(), y.len())`](crate::div_scratch_size).
///
/// On success, with `nwx = x.len()` and `nwy = y.len()`:
/// - `scratch[0 .. nwx + 1]` holds `q·y`, with `scratch[nwx] == 0`.
/// - `scratch[nwx + 1 .. 2*nwx - nwy + 2]` holds `q`, width `nwx - nwy + 1`.
///
/// The remainder `x - q·y` (always in `[0, y)`) is left for the caller to
/// compute; this kernel only ever subtracts internally, to correct its own
/// candidate.
///
/// # Errors
/// Propagates any error the multiplication callback reports, unchanged.
/// `scratch`'s contents are unspecified after an error.
pub fn div<M: Multiply>(
    x: &[Word],
    y: &[Word],
    base: Word,
    scratch: &mut [Word],
    mul: &mut M,
) -> Result<(), M::Error> {
    let nwx = x.len();
    let nwy = y.len();
    debug_assert!(nwy >= MIN_W, "divisor narrower than MIN_W");
    debug_assert!(nwx >= nwy, "dividend narrower than divisor");
    debug_assert!(y[nwy - 1] != 0, "divisor must be normalized");

    let nwq = nwx - nwy + 1;

    if digits::is_power_of_base(y, base) {
        let qy_len = nwx + 1;
        scratch[..qy_len].fill(0);
        let top = &x[nwx - nwq..nwx];
        scratch[nwy - 1..nwy - 1 + nwq].copy_from_slice(top);
        scratch[nwx + 1..nwx + 1 + nwq].copy_from_slice(top);
        return Ok(());
    }

    let p = nwq + 1; // nwx - nwy + 2

    // 1. Reciprocal of y to precision p, written to scratch[0..p].
    inv(y, p, base, scratch, mul)?;

    // 2. Candidate = x * r, written to scratch[0..nwx+p]; out aliases r's
    // own storage at the same start address, which Multiply permits.
    {
        let base_ptr = scratch.as_mut_ptr();
        // SAFETY: x is an external, disjoint slice; out = scratch[0..nwx+p]
        // aliases b = scratch[0..p] at the same start address (permitted),
        // and does not overlap x. Lengths fit scratch by the size contract.
        unsafe {
            mul.multiply_raw(x.as_ptr(), nwx, base_ptr as *const Word, p, base_ptr)?;
        }
    }

    // 3. Tentative +1 on the candidate's integer part, scratch[nwx+1..nwx+1+nwq].
    {
        let q = &mut scratch[nwx + 1..nwx + 1 + nwq];
        let carry = digits::add_one_in_place(q, base);
        if carry != 0 {
            // q was all (base - 1)s; the increment wrapped to all zeros.
            // Undo it: the candidate set {true_q, true_q + 1} still holds
            // with the pre-increment value.
            digits::sub_one_in_place(q, base);
        }
    }

    // 4. q * y, written to scratch[0..nwx+1]; disjoint from the candidate
    // q at scratch[nwx+1..].
    {
        let base_ptr = scratch.as_mut_ptr();
        // SAFETY: y is external and disjoint from scratch; out =
        // scratch[0..nwx+1] and b (the candidate q) = scratch[nwx+1..] do
        // not overlap.
        unsafe {
            let q_ptr = base_ptr.add(nwx + 1) as *const Word;
            mul.multiply_raw(y.as_ptr(), nwy, q_ptr, nwq, base_ptr)?;
        }
    }

    // 5. Final correction: if q*y > x, subtract y once and decrement q.
    let qy_top = scratch[nwx];
    let exceeds = qy_top != 0 || digits::compare_n(&scratch[..nwx], x) == Ordering::Greater;
    if exceeds {
        digits::sub_raw(&mut scratch[..nwx + 1], y, base);
        let q = &mut scratch[nwx + 1..nwx + 1 + nwq];
        let borrow = digits::sub_one_in_place(q, base);
        debug_assert_eq!(borrow, 0, "quotient underflowed on final correction");
    }

    debug_assert_eq!(scratch[nwx], 0, "q*y must fit in nwx words after correction");

    Ok(())
}
