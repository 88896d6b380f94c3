//! Independent big-integer helpers used only by the integration tests to
//! cross-check `newton_div`'s results. Deliberately does not reuse anything
//! from the crate under test (not even its private `digits` module, which
//! isn't visible here anyway) so a bug shared between the kernel and its
//! checker can't hide.

use std::cmp::Ordering;

use newton_div::Word;

/// A normalized (no trailing zero words, except the single value zero)
/// random big number of exactly `n` words.
pub fn random_words<R: rand::Rng + ?Sized>(n: usize, base: Word, rng: &mut R) -> Vec<Word> {
    assert!(n > 0);
    let mut words: Vec<Word> = (0..n).map(|_| rng.gen_range(0..base)).collect();
    let top = n - 1;
    if words[top] == 0 {
        words[top] = 1 + rng.gen_range(0..base - 1);
    }
    words
}

/// Length after dropping trailing (most significant) zero words.
fn normalized_len(a: &[Word]) -> usize {
    let mut n = a.len();
    while n > 0 && a[n - 1] == 0 {
        n -= 1;
    }
    n
}

/// Lexicographic, most-significant-word-first comparison of two big
/// numbers of possibly different lengths.
pub fn bigcmp(a: &[Word], b: &[Word]) -> Ordering {
    let na = normalized_len(a);
    let nb = normalized_len(b);
    na.cmp(&nb).then_with(|| a[..na].iter().rev().cmp(b[..nb].iter().rev()))
}

/// `a * b`, schoolbook, returned with exactly `a.len() + b.len()` words
/// (possibly with high zero words).
pub fn bigmul(a: &[Word], b: &[Word], base: Word) -> Vec<Word> {
    let mut out = vec![0u128; a.len() + b.len()];
    for (i, &av) in a.iter().enumerate() {
        let mut carry: u128 = 0;
        for (j, &bv) in b.iter().enumerate() {
            let v = out[i + j] + av as u128 * bv as u128 + carry;
            out[i + j] = v % base as u128;
            carry = v / base as u128;
        }
        out[i + b.len()] += carry;
    }
    // Propagate any residual carry chain (out[i+b.len()] may itself exceed base
    // after the += above only by a small bounded amount given base < Word::MAX/2,
    // so renormalize left to right).
    let mut carry = 0u128;
    let mut result = vec![0 as Word; out.len()];
    for (i, &v) in out.iter().enumerate() {
        let v = v + carry;
        result[i] = (v % base as u128) as Word;
        carry = v / base as u128;
    }
    assert_eq!(carry, 0, "bigmul result overflowed its allocated width");
    result
}

/// `a - b`, assuming (checked via debug_assert) `a >= b`. Result has
/// `a.len()` words.
pub fn bigsub(a: &[Word], b: &[Word], base: Word) -> Vec<Word> {
    debug_assert_ne!(bigcmp(a, b), Ordering::Less, "bigsub called with a < b");
    let mut out = vec![0 as Word; a.len()];
    let mut borrow: i128 = 0;
    for (i, slot) in out.iter_mut().enumerate() {
        let bv = b.get(i).copied().unwrap_or(0) as i128;
        let mut v = a[i] as i128 - bv - borrow;
        if v < 0 {
            v += base as i128;
            borrow = 1;
        } else {
            borrow = 0;
        }
        *slot = v as Word;
    }
    out
}

/// Parses a decimal string into base-`10^9` words, little-endian.
pub fn decimal_to_words(s: &str) -> Vec<Word> {
    const DIGITS_PER_WORD: usize = 9;
    let bytes = s.as_bytes();
    let nwords = (bytes.len() + DIGITS_PER_WORD - 1) / DIGITS_PER_WORD;
    let mut words = vec![0 as Word; nwords.max(1)];
    let mut end = bytes.len();
    for word in words.iter_mut() {
        let start = end.saturating_sub(DIGITS_PER_WORD);
        let chunk = std::str::from_utf8(&bytes[start..end]).unwrap();
        *word = chunk.parse().unwrap();
        end = start;
    }
    while words.len() > 1 && *words.last().unwrap() == 0 {
        words.pop();
    }
    words
}
