use data_structures_mini::core::puzzles::{max_profit, two_sum, TwoSum};
use data_structures_mini::core::search::binary_search;
use data_structures_mini::core::sort::{bubble_sort, insertion_sort, selection_sort};
use data_structures_mini::core::stack::{parens_balanced, parens_balanced_counter, Stack};

#[test]
fn test_stack_push_pop_peek() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    stack.push("Kraig");
    stack.push("Christine");
    stack.push("Tippy");
    assert_eq!(stack.to_string(), "Kraig,Christine,Tippy");
    assert_eq!(stack.peek(), Some(&"Tippy"));
    assert_eq!(stack.pop(), Some("Tippy"));
    assert_eq!(stack.to_string(), "Kraig,Christine");
    assert_eq!(stack.len(), 2);
}

#[test]
fn test_stack_from_vec_and_equality() {
    let stack = Stack::from(vec!["One", "Two", "Three"]);
    assert_eq!(stack.peek(), Some(&"Three"));

    let a = Stack::from([1, 2, 3]);
    let b: Stack<i32> = (1..=3).collect();
    let c = Stack::from([3, 2, 1]);
    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut empty: Stack<i32> = Stack::default();
    assert_eq!(empty.pop(), None);
    assert_eq!(empty.to_string(), "");
}

#[test]
fn test_balanced_parentheses() {
    let checks: [fn(&str) -> bool; 2] = [parens_balanced, parens_balanced_counter];
    for check in checks {
        assert!(check("(test) (what) up"));
        assert!(!check("(test) (what) up)"));
        assert!(!check(")("));
        assert!(!check("(("));
        assert!(check(""));
        assert!(check("((a)(b))"));
    }
}

#[test]
fn test_sorts_agree() {
    let input = [5, 1, 76, 10, 5, 7, 2, 5, 2, 1000];
    let expected = vec![1, 2, 2, 5, 5, 5, 7, 10, 76, 1000];
    assert_eq!(bubble_sort(&input), expected);
    assert_eq!(insertion_sort(&input), expected);
    assert_eq!(selection_sort(&input), expected);
    // input untouched
    assert_eq!(input[0], 5);
}

#[test]
fn test_selection_sort_strings() {
    let names = ["Charlie", "Bravo", "Alpha", "Delta", "Echo", "Charlie"];
    assert_eq!(
        selection_sort(&names),
        vec!["Alpha", "Bravo", "Charlie", "Charlie", "Delta", "Echo"]
    );
    assert_eq!(selection_sort(&["Charlie"]), vec!["Charlie"]);

    let sorted = ["Alpha", "Bravo", "Charlie"];
    assert_eq!(insertion_sort(&sorted), sorted.to_vec());
    assert_eq!(bubble_sort(&sorted), sorted.to_vec());
    assert!(bubble_sort::<i32>(&[]).is_empty());
}

#[test]
fn test_binary_search() {
    let numbers = [1, 3, 5, 7, 9, 11, 13];
    assert_eq!(binary_search(&numbers, &7), Some(3));
    assert_eq!(binary_search(&numbers, &8), None);
    assert_eq!(binary_search(&numbers, &0), None);
    assert_eq!(binary_search(&numbers, &14), None);

    let empty: [i32; 0] = [];
    assert_eq!(binary_search(&empty, &42), None);
    assert_eq!(binary_search(&[42], &42), Some(0));
    assert_eq!(binary_search(&[99], &42), None);

    let bounds = [10, 20, 30, 40, 50];
    assert_eq!(binary_search(&bounds, &10), Some(0));
    assert_eq!(binary_search(&bounds, &50), Some(4));

    let dupes = [1, 2, 2, 2, 3, 4, 5];
    assert!(matches!(binary_search(&dupes, &2), Some(1..=3)));
    assert_eq!(binary_search(&dupes, &6), None);
}

#[test]
fn test_max_profit() {
    let cases: [(&[i64], i64); 10] = [
        (&[7, 1, 5, 3, 6, 4], 5),
        (&[7, 6, 4, 3, 1], 0),
        (&[2, 4, 1], 2),
        (&[5], 0),
        (&[1, 5], 4),
        (&[5, 1], 0),
        (&[3, 3, 3, 3, 3], 0),
        (&[1, 2, 3, 4, 5], 4),
        (&[3, 2, 6, 5, 0, 3], 4),
        (&[], 0),
    ];
    for (prices, expected) in cases {
        assert_eq!(max_profit(prices), expected, "prices {:?}", prices);
    }
}

#[test]
fn test_two_sum() {
    assert_eq!(
        two_sum(&[1, 6, 7, 9, 10, 20], 29),
        Some(TwoSum { first_index: 3, second_index: 5 })
    );
    assert_eq!(
        two_sum(&[3, 3], 6),
        Some(TwoSum { first_index: 0, second_index: 1 })
    );
    assert_eq!(two_sum(&[1, 2, 3], 100), None);
    assert_eq!(two_sum(&[], 0), None);
}
