//! # String-Match Suite
//!
//! First occurrence of a pattern in a text. Positions are counted in `char`s
//! (Unicode scalar values), not bytes, so `"héllo"` finds `"llo"` at 2.
//! An empty pattern matches at 0 of any text, including the empty text.

pub mod kmp;
pub mod rabin_karp;

pub use kmp::kmp_search;
pub use rabin_karp::RabinKarp;

/// Slide the pattern across every offset, comparing window by window.
pub fn naive_search(text: &str, pattern: &str) -> Option<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    naive_chars(&text, &pattern)
}

fn naive_chars(text: &[char], pattern: &[char]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    text.windows(pattern.len()).position(|window| window == pattern)
}

/// Rabin–Karp with the default (demonstration-sized) modulus.
pub fn rabin_karp(text: &str, pattern: &str) -> Option<usize> {
    RabinKarp::default().find(text, pattern)
}
