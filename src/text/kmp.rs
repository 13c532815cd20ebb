//! Knuth–Morris–Pratt.

/// First occurrence of `pattern` in `text` in O(n + m).
pub fn kmp_search(text: &str, pattern: &str) -> Option<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() {
        return Some(0);
    }

    let lps = failure_table(&pattern);
    let (mut i, mut j) = (0, 0);
    while i < text.len() {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;
            if j == pattern.len() {
                return Some(i - j);
            }
        } else if j > 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }
    None
}

/// `lps[i]` = length of the longest proper prefix of `pattern[..=i]` that is
/// also a suffix of it.
pub fn failure_table<T: PartialEq>(pattern: &[T]) -> Vec<usize> {
    let mut lps = vec![0; pattern.len()];
    let mut len = 0;
    for i in 1..pattern.len() {
        while len > 0 && pattern[i] != pattern[len] {
            len = lps[len - 1];
        }
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
        }
    }
    lps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_table() {
        let lps = |p: &str| failure_table(&p.chars().collect::<Vec<_>>());
        assert_eq!(lps("ababca"), vec![0, 0, 1, 2, 0, 1]);
        assert_eq!(lps("aaaa"), vec![0, 1, 2, 3]);
        assert_eq!(lps("abcd"), vec![0, 0, 0, 0]);
        assert!(lps("").is_empty());
    }

    #[test]
    fn test_fallback_without_rescanning() {
        assert_eq!(kmp_search("aabaabaaab", "aaab"), Some(6));
    }
}
