//! # Search Suite
//!
//! Locate a target's index in a slice. Every function is total: absence is
//! `None`, never a panic. All but [`linear_search`] assume the slice is sorted
//! ascending; on unsorted input they return an unspecified (but in-bounds or
//! `None`) answer rather than an error.
//!
//! | Function | Precondition | Cost |
//! |----------|--------------|------|
//! | [`linear_search`] | none | O(n) |
//! | [`binary_search`] | sorted | O(log n) |
//! | [`jump_search`] | sorted | O(√n) |
//! | [`interpolation_search`] | sorted, numeric | O(log log n) avg |
//! | [`exponential_search`] | sorted | O(log i) |
//! | [`fibonacci_search`] | sorted | O(log n) |

use crate::model::Value;

/// Wire sentinel for "not found".
pub const NOT_FOUND: i64 = -1;

/// Render a search result the way clients see it: the index, or [`NOT_FOUND`].
pub fn sentinel(index: Option<usize>) -> i64 {
    index.map_or(NOT_FOUND, |i| i as i64)
}

/// Values interpolation search can estimate positions for.
///
/// `to_f64` is only used to guess where to look; every hit or miss is
/// decided by the exact `PartialOrd` comparison, so lossy conversions (large
/// integers) cost extra steps but never produce a wrong index.
pub trait Numeric: PartialOrd {
    fn to_f64(&self) -> f64;
}

impl Numeric for i64 {
    fn to_f64(&self) -> f64 { *self as f64 }
}

impl Numeric for f64 {
    fn to_f64(&self) -> f64 { *self }
}

/// Non-numeric values map to NaN; callers are expected to reject them first.
impl Numeric for Value {
    fn to_f64(&self) -> f64 {
        self.as_float().unwrap_or(f64::NAN)
    }
}

// ============================================================================
// Linear
// ============================================================================

/// First index whose element equals `target`.
pub fn linear_search<T: PartialEq>(items: &[T], target: &T) -> Option<usize> {
    items.iter().position(|item| item == target)
}

// ============================================================================
// Binary
// ============================================================================

/// Classic halving over a half-open window. Returns the first match the
/// halving lands on, which is not necessarily the leftmost duplicate.
pub fn binary_search<T: PartialOrd>(items: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0, items.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let candidate = &items[mid];
        if candidate == target {
            return Some(mid);
        }
        if candidate < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    None
}

// ============================================================================
// Jump
// ============================================================================

/// Skip ahead in blocks of ⌊√n⌋ until a block's last element is ≥ target,
/// then scan that block.
pub fn jump_search<T: PartialOrd>(items: &[T], target: &T) -> Option<usize> {
    let n = items.len();
    if n == 0 {
        return None;
    }

    let step = n.isqrt().max(1);
    let mut block_start = 0;
    let mut block_end = step.min(n);

    while items[block_end - 1] < *target {
        block_start = block_end;
        if block_start >= n {
            return None;
        }
        block_end = (block_end + step).min(n);
    }

    for (i, item) in items[block_start..block_end].iter().enumerate() {
        if item == target {
            return Some(block_start + i);
        }
        if item > target {
            break;
        }
    }
    None
}

// ============================================================================
// Interpolation
// ============================================================================

/// Probe where the target "should" be if values were evenly spread between
/// the window bounds. When the bounds convert to the same float (a flat
/// window, or integers past 2^53) there is nothing to interpolate, so the
/// window shrinks from the low end one element at a time.
pub fn interpolation_search<T: Numeric>(items: &[T], target: &T) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    let (mut lo, mut hi) = (0usize, items.len() - 1);

    while lo <= hi && items[lo] <= *target && *target <= items[hi] {
        let low_value = items[lo].to_f64();
        let high_value = items[hi].to_f64();

        if lo == hi || high_value == low_value {
            if items[lo] == *target {
                return Some(lo);
            }
            lo += 1;
            continue;
        }

        let span = (hi - lo) as f64;
        let offset = span / (high_value - low_value) * (target.to_f64() - low_value);
        let pos = lo.saturating_add(offset as usize).min(hi);

        if items[pos] == *target {
            return Some(pos);
        }
        if items[pos] < *target {
            lo = pos + 1;
        } else {
            hi = pos.checked_sub(1)?;
        }
    }
    None
}

// ============================================================================
// Exponential
// ============================================================================

/// Probe indices 1, 2, 4, 8, ... to bracket the target, then binary search
/// inside the bracket.
pub fn exponential_search<T: PartialOrd>(items: &[T], target: &T) -> Option<usize> {
    let n = items.len();
    if n == 0 {
        return None;
    }
    if items[0] == *target {
        return Some(0);
    }

    let mut bound = 1;
    while bound < n && items[bound] <= *target {
        bound *= 2;
    }

    let lo = bound / 2;
    let hi = bound.min(n - 1);
    binary_search(&items[lo..=hi], target).map(|i| lo + i)
}

// ============================================================================
// Fibonacci
// ============================================================================

/// Split the window at Fibonacci offsets, discarding roughly a third of it
/// per comparison.
pub fn fibonacci_search<T: PartialOrd>(items: &[T], target: &T) -> Option<usize> {
    let n = items.len();

    // (F(m-2), F(m-1), F(m)) with F(m) the smallest Fibonacci number >= n
    let (mut fib2, mut fib1) = (0usize, 1usize);
    let mut fib = fib2 + fib1;
    while fib < n {
        fib2 = fib1;
        fib1 = fib;
        fib = fib2 + fib1;
    }

    // Index of the last element known to be < target, if any.
    let mut offset: Option<usize> = None;
    let next = |offset: Option<usize>| offset.map_or(0, |o| o + 1);

    while fib > 1 {
        let i = (next(offset) + fib2 - 1).min(n - 1);
        if items[i] < *target {
            fib = fib1;
            fib1 = fib2;
            fib2 = fib - fib1;
            offset = Some(i);
        } else if items[i] > *target {
            fib = fib2;
            fib1 -= fib2;
            fib2 = fib - fib1;
        } else {
            return Some(i);
        }
    }

    let candidate = next(offset);
    (fib1 != 0 && candidate < n && items[candidate] == *target).then_some(candidate)
}
