//! Quadratic comparison sorts.
//!
//! Each sort copies its input and returns the sorted copy. Every comparison
//! and swap is reported at `trace` level, so running with
//! `RUST_LOG=data_structures_mini=trace` walks through the algorithm step by step.

use std::fmt::Debug;

/// Repeatedly bubble the largest remaining item to the end; stops after a pass with no swaps.
pub fn bubble_sort<T: Ord + Clone + Debug>(items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    if copy.len() < 2 {
        return copy;
    }

    for end in (1..copy.len()).rev() {
        let mut swapped = false;
        for current in 0..end {
            let next = current + 1;
            if copy[current] > copy[next] {
                tracing::trace!(current, next, before = ?copy, "bubble swap");
                copy.swap(current, next);
                swapped = true;
            }
        }
        if !swapped {
            tracing::trace!(end, "no swaps in pass, done");
            break;
        }
    }
    copy
}

/// Grow a sorted prefix by sliding each new item left past larger neighbours.
pub fn insertion_sort<T: Ord + Clone + Debug>(items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    if copy.len() < 2 {
        return copy;
    }

    for sorted_len in 1..copy.len() {
        for index in (1..=sorted_len).rev() {
            let left = index - 1;
            if copy[left] > copy[index] {
                tracing::trace!(index, left, before = ?copy, "insertion swap");
                copy.swap(index, left);
            } else {
                break;
            }
        }
    }
    copy
}

/// Swap the smallest remaining item into each position in turn.
pub fn selection_sort<T: Ord + Clone + Debug>(items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    if copy.len() < 2 {
        return copy;
    }

    for index in 0..copy.len() - 1 {
        let mut lowest = index;
        for compare in (index + 1)..copy.len() {
            if copy[compare] < copy[lowest] {
                lowest = compare;
            }
        }
        if lowest != index {
            tracing::trace!(index, lowest, before = ?copy, "selection swap");
            copy.swap(lowest, index);
        }
    }
    copy
}
