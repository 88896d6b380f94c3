//! Scratch-buffer sizing.
//!
//! [`crate::recip::inv`] and [`crate::div::div`] never allocate; the caller
//! sizes their scratch buffer up front using these functions. Both use
//! checked arithmetic and report [`ScratchOverflow`] rather than silently
//! wrapping, since a wrapped size would otherwise cause a too-small buffer
//! to be accepted and the kernel to panic deep inside a loop instead of at
//! the boundary.

use crate::error::ScratchOverflow;

/// Scratch words required by [`crate::recip::inv`] for a divisor of `nwd`
/// words and `prec` words of requested precision.
///
/// Grounded on `decinewt_inv_nscratch`: `nwd + 3 * prec`. The `3*prec` covers
/// the doubling-precision `x_n` / `v` pair at the final (largest) iteration;
/// `nwd` is the extra room `v = d * x_n` needs beyond `x_n`'s own span.
pub fn inv_scratch_size(nwd: usize, prec: usize) -> Result<usize, ScratchOverflow> {
    let triple_prec = prec.checked_mul(3).ok_or(ScratchOverflow)?;
    nwd.checked_add(triple_prec).ok_or(ScratchOverflow)
}

/// Scratch words required by [`crate::div::div`] for a dividend of `nwx`
/// words and a divisor of `nwy` words (`nwx >= nwy`).
///
/// Grounded on `decinewt_div_nscratch`: the max of the space needed for the
/// `x * r` product (`nwx + p`, where `p = nwx - nwy + 2`) and the space
/// needed by the internal `inv` call at that same precision `p`.
pub fn div_scratch_size(nwx: usize, nwy: usize) -> Result<usize, ScratchOverflow> {
    debug_assert!(nwx >= nwy);
    let base_prec = nwx
        .checked_sub(nwy)
        .and_then(|d| d.checked_add(2))
        .ok_or(ScratchOverflow)?;
    let product_len = nwx.checked_add(base_prec).ok_or(ScratchOverflow)?;
    let inv_len = inv_scratch_size(nwy, base_prec)?;
    Ok(product_len.max(inv_len))
}
