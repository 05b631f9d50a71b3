use std::collections::HashMap;
use serde::{Serialize, Deserialize};

/// Best profit from one buy followed by one later sell; 0 if prices never rise.
pub fn max_profit(prices: &[i64]) -> i64 {
    let mut lowest = i64::MAX;
    let mut best = 0;
    for &price in prices {
        lowest = lowest.min(price);
        best = best.max(price.saturating_sub(lowest));
    }
    best
}

/// Indices of the two numbers that add up to the target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwoSum {
    pub first_index: usize,
    pub second_index: usize,
}

/// Single pass with a value -> index map; returns the first pair completed.
pub fn two_sum(numbers: &[i64], target: i64) -> Option<TwoSum> {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for (index, &value) in numbers.iter().enumerate() {
        if let Some(&first_index) = target.checked_sub(value).and_then(|c| seen.get(&c)) {
            return Some(TwoSum { first_index, second_index: index });
        }
        seen.insert(value, index);
    }
    None
}
