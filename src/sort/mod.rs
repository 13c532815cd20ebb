//! # Sort Suite
//!
//! Six ways to produce the same ascending permutation. Every function borrows
//! its input and returns a freshly allocated `Vec`, so callers can rely on the
//! input being untouched.
//!
//! All six are stable. Elements that compare equal but are not identical
//! (`1` and `1.0`, `0.0` and `-0.0`) keep their input order, so every
//! function returns exactly the same sequence.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

// ============================================================================
// Quadratic sorts
// ============================================================================

/// Adjacent-swap passes, stopping after the first pass that swaps nothing.
pub fn bubble_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    let n = out.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if out[j] > out[j + 1] {
                out.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    out
}

/// Move the first minimum of the unsorted suffix to its front, n times.
/// Rotating instead of swapping keeps equal elements in order.
pub fn selection_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    let n = out.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            if out[j] < out[min_idx] {
                min_idx = j;
            }
        }
        out[i..=min_idx].rotate_right(1);
    }
    out
}

/// Grow a sorted prefix by shifting larger elements one slot right.
pub fn insertion_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    for i in 1..out.len() {
        let mut slot = i;
        while slot > 0 && out[slot - 1] > out[i] {
            slot -= 1;
        }
        out[slot..=i].rotate_right(1);
    }
    out
}

// ============================================================================
// Divide and conquer
// ============================================================================

/// Top-down merge sort. Stable: on ties the left run wins.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);

    let mut merged = Vec::with_capacity(items.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}

enum Work<T> {
    Partition(Vec<T>),
    Emit(Vec<T>),
}

/// Middle-element pivot, three-way partition into less / equal / greater.
///
/// Pending partitions live on an explicit stack instead of the call stack, so
/// adversarial inputs cost O(n²) time but never overflow the thread stack.
pub fn quick_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len());
    let mut stack = vec![Work::Partition(items.to_vec())];

    while let Some(work) = stack.pop() {
        match work {
            Work::Emit(run) => out.extend(run),
            Work::Partition(run) if run.len() <= 1 => out.extend(run),
            Work::Partition(run) => {
                let pivot = run[run.len() / 2].clone();
                let mut less = Vec::new();
                let mut equal = Vec::new();
                let mut greater = Vec::new();
                for item in run {
                    match item.cmp(&pivot) {
                        std::cmp::Ordering::Less => less.push(item),
                        std::cmp::Ordering::Equal => equal.push(item),
                        std::cmp::Ordering::Greater => greater.push(item),
                    }
                }
                // LIFO: pushed in reverse of output order
                stack.push(Work::Partition(greater));
                stack.push(Work::Emit(equal));
                stack.push(Work::Partition(less));
            }
        }
    }
    out
}

/// Heapify into a min-heap, then pop the minimum n times. Entries carry
/// their input position so ties pop in input order.
pub fn heap_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut heap: BinaryHeap<Reverse<(T, usize)>> = items
        .iter()
        .cloned()
        .enumerate()
        .map(|(position, item)| Reverse((item, position)))
        .collect();
    std::iter::from_fn(|| heap.pop().map(|Reverse((item, _))| item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;
    use pretty_assertions::assert_eq;

    type SortFn = fn(&[i64]) -> Vec<i64>;

    const ALL: [(&str, SortFn); 6] = [
        ("bubble", bubble_sort),
        ("selection", selection_sort),
        ("insertion", insertion_sort),
        ("merge", merge_sort),
        ("quick", quick_sort),
        ("heap", heap_sort),
    ];

    #[test]
    fn test_fixture() {
        let input = [5, 2, 9, 1, 5, 6];
        for (name, sort) in ALL {
            assert_eq!(sort(&input), vec![1, 2, 5, 5, 6, 9], "{name}");
        }
    }

    #[test]
    fn test_edge_shapes() {
        let cases: Vec<Vec<i64>> = vec![
            vec![],
            vec![42],
            vec![3, 3, 3, 3],
            vec![9, 8, 7, 6, 5, 4, 3, 2, 1],
            vec![1, 2, 3, 4, 5],
            vec![-4, 10, -4, 0, i64::MAX, i64::MIN],
        ];
        for case in cases {
            let mut expected = case.clone();
            expected.sort();
            for (name, sort) in ALL {
                assert_eq!(sort(&case), expected, "{name} on {case:?}");
            }
        }
    }

    #[test]
    fn test_input_untouched() {
        let input = vec![4, 1, 3];
        let snapshot = input.clone();
        for (_, sort) in ALL {
            let _ = sort(&input);
        }
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_sorted_input_is_fixed_point() {
        let sorted = [1, 2, 2, 7, 11];
        for (name, sort) in ALL {
            assert_eq!(sort(&sorted), sorted.to_vec(), "{name}");
        }
    }

    #[test]
    fn test_every_sort_is_stable() {
        #[derive(Debug, Clone)]
        struct Keyed {
            key: i32,
            tag: char,
        }
        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool { self.key == other.key }
        }
        impl Eq for Keyed {}
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> { Some(self.cmp(other)) }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering { self.key.cmp(&other.key) }
        }

        let input = vec![
            Keyed { key: 2, tag: 'a' },
            Keyed { key: 1, tag: 'b' },
            Keyed { key: 2, tag: 'c' },
            Keyed { key: 1, tag: 'd' },
        ];
        let sorts: [(&str, fn(&[Keyed]) -> Vec<Keyed>); 6] = [
            ("bubble", bubble_sort),
            ("selection", selection_sort),
            ("insertion", insertion_sort),
            ("merge", merge_sort),
            ("quick", quick_sort),
            ("heap", heap_sort),
        ];
        for (name, sort) in sorts {
            let tags: Vec<char> = sort(&input).into_iter().map(|k| k.tag).collect();
            assert_eq!(tags, vec!['b', 'd', 'a', 'c'], "{name}");
        }
    }

    #[test]
    fn test_equal_numbers_keep_their_spelling() {
        let input = vec![Value::Float(0.0), Value::Int(0), Value::Float(-0.0), Value::Float(1.0), Value::Int(1)];
        let rendered: Vec<String> = [
            bubble_sort(&input),
            selection_sort(&input),
            insertion_sort(&input),
            merge_sort(&input),
            quick_sort(&input),
            heap_sort(&input),
        ]
        .iter()
        .map(|sorted| serde_json::to_string(sorted).unwrap())
        .collect();
        for r in &rendered {
            assert_eq!(r, "[0.0,0,-0.0,1.0,1]");
        }
    }

    #[test]
    fn test_mixed_values() {
        let input = vec![Value::from("b"), Value::from(2.5), Value::from(1), Value::from("a")];
        let expected = vec![Value::from(1), Value::from(2.5), Value::from("a"), Value::from("b")];
        assert_eq!(heap_sort(&input), expected);
        assert_eq!(quick_sort(&input), expected);
    }

    #[test]
    fn test_quick_sort_deep_duplicates() {
        let input: Vec<i64> = (0..20_000).map(|i| i % 3).collect();
        let out = quick_sort(&input);
        assert!(out.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(out.len(), input.len());
    }
}
