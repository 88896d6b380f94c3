//! Divides two decimal integers given on the command line, using the
//! `SimpleMultiplier` reference implementation.
//!
//! Usage: `decimal_div <dividend> <divisor>`
//!
//! Decimal parsing/printing and the final subtraction that recovers the
//! remainder are demo-only concerns, kept out of the library the same way
//! `ibig`'s `examples/factorial.rs` keeps `println!` formatting out of
//! `UBig` itself.

use std::env;
use std::process;

use newton_div::{div, div_scratch_size, SimpleMultiplier, Word, MIN_W};

const BASE: Word = 1_000_000_000; // 9 decimal digits per word.
const DIGITS_PER_WORD: usize = 9;

fn decimal_to_words(s: &str) -> Vec<Word> {
    let s = s.trim();
    assert!(!s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()), "not a decimal integer: {s}");
    let bytes = s.as_bytes();
    let nwords = (bytes.len() + DIGITS_PER_WORD - 1) / DIGITS_PER_WORD;
    let mut words = vec![0 as Word; nwords];
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

fn words_to_decimal(words: &[Word]) -> String {
    let mut it = words.iter().rev();
    let mut out = match it.next() {
        Some(&hi) => hi.to_string(),
        None => return "0".to_string(),
    };
    for &w in it {
        out.push_str(&format!("{:0width$}", w, width = DIGITS_PER_WORD));
    }
    out
}

/// `a -= b` in place, little-endian, `a.len() >= b.len()`. Demo-local:
/// the kernel's own `digits::sub` is not part of the public API.
fn sub_in_place(a: &mut [Word], b: &[Word]) {
    let mut borrow: i128 = 0;
    for (i, x) in a.iter_mut().enumerate() {
        let bv = b.get(i).copied().unwrap_or(0) as i128;
        let mut v = *x as i128 - bv - borrow;
        if v < 0 {
            v += BASE as i128;
            borrow = 1;
        } else {
            borrow = 0;
        }
        *x = v as Word;
    }
    assert_eq!(borrow, 0, "subtraction underflowed: b > a");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: {} <dividend> <divisor>", args[0]);
        process::exit(2);
    }

    let x = decimal_to_words(&args[1]);
    let y = decimal_to_words(&args[2]);

    if y.len() < MIN_W {
        eprintln!(
            "divisor too narrow: needs at least {} words ({} decimal digits) at base {}",
            MIN_W,
            MIN_W * DIGITS_PER_WORD,
            BASE
        );
        process::exit(1);
    }
    if x.len() < y.len() {
        eprintln!("dividend must not be narrower than the divisor");
        process::exit(1);
    }

    let nwx = x.len();
    let nwy = y.len();
    let mut scratch = vec![0 as Word; div_scratch_size(nwx, nwy).unwrap()];
    let mut mul = SimpleMultiplier::new(BASE);
    div(&x, &y, BASE, &mut scratch, &mut mul).unwrap();

    let quotient = scratch[nwx + 1..2 * nwx - nwy + 2].to_vec();
    let mut remainder = x.clone();
    sub_in_place(&mut remainder, &scratch[..nwx]);

    println!("{} / {} = {}", args[1].trim(), args[2].trim(), words_to_decimal(&quotient));
    println!("{} % {} = {}", args[1].trim(), args[2].trim(), words_to_decimal(&remainder));
}
