//! Rabin–Karp rolling-hash search.

/// Polynomial rolling hash parameters.
///
/// The default modulus (101) is small enough that unrelated windows collide
/// often; every hash hit is confirmed by direct comparison, so collisions cost
/// time but never produce a false match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RabinKarp {
    base: u64,
    modulus: u64,
}

impl Default for RabinKarp {
    fn default() -> Self {
        Self { base: 256, modulus: 101 }
    }
}

impl RabinKarp {
    /// `None` unless `base >= 1` and `modulus >= 2`.
    pub fn new(base: u64, modulus: u64) -> Option<Self> {
        (base >= 1 && modulus >= 2).then_some(Self { base, modulus })
    }

    pub fn base(&self) -> u64 { self.base }
    pub fn modulus(&self) -> u64 { self.modulus }

    /// First occurrence of `pattern` in `text`, in chars.
    pub fn find(&self, text: &str, pattern: &str) -> Option<usize> {
        let text: Vec<char> = text.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        let (n, m) = (text.len(), pattern.len());
        if m == 0 {
            return Some(0);
        }
        if m > n {
            return None;
        }

        // u128 keeps every product below 2^128 for any u64 base/modulus
        let base = u128::from(self.base);
        let modulus = u128::from(self.modulus);
        let code = |c: char| u128::from(u32::from(c));

        // weight of the outgoing char: base^(m-1) mod modulus
        let lead = (1..m).fold(1u128, |acc, _| acc * base % modulus);

        let roll = |hash: u128, c: char| (hash * base + code(c)) % modulus;
        let pattern_hash = pattern.iter().fold(0, |h, &c| roll(h, c));
        let mut window_hash = text[..m].iter().fold(0, |h, &c| roll(h, c));

        for i in 0..=n - m {
            if window_hash == pattern_hash && text[i..i + m] == pattern[..] {
                return Some(i);
            }
            if i < n - m {
                let outgoing = code(text[i]) * lead % modulus;
                let trimmed = (window_hash + modulus - outgoing) % modulus;
                window_hash = roll(trimmed, text[i + m]);
            }
        }
        None
    }
}
