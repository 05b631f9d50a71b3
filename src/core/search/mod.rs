/// Recursive binary search over a sorted slice.
///
/// Returns the index of some element equal to `target`; with duplicates any
/// matching index may come back.
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    search(items, target, 0, items.len() - 1)
}

// Inclusive window; `high` never underflows because `mid == low` returns before `mid - 1`.
fn search<T: Ord>(items: &[T], target: &T, low: usize, high: usize) -> Option<usize> {
    if low > high {
        return None;
    }
    let mid = low + (high - low) / 2;
    match target.cmp(&items[mid]) {
        std::cmp::Ordering::Equal => Some(mid),
        std::cmp::Ordering::Less => {
            if mid == low {
                None
            } else {
                search(items, target, low, mid - 1)
            }
        }
        std::cmp::Ordering::Greater => search(items, target, mid + 1, high),
    }
}
