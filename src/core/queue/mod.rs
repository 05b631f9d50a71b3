use std::sync::{Arc, Mutex};

/// FIFO capability shared by every queue variant.
///
/// `Default` builds an empty queue, so generic callers can construct any
/// conforming variant without knowing its layout.
pub trait Queue: Default {
    type Item;

    /// Add an item at the back
    fn enqueue(&mut self, item: Self::Item);

    /// Remove the front item, `None` when empty
    fn dequeue(&mut self) -> Option<Self::Item>;

    /// Front item without removing it
    fn peek(&self) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Cumulative items moved between internal buffers, for variants that move any
    fn refill_transfers(&self) -> Option<usize> {
        None
    }
}

/// Single-buffer queue: dequeue shifts every remaining item left, O(n).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayQueue<T> {
    items: Vec<T>,
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayQueue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Queue for ArrayQueue<T> {
    type Item = T;

    fn enqueue(&mut self, item: T) {
        self.items.push(item);
        // --post operation assertion
        assert!(!self.items.is_empty(), "Queue must have at least one item after enqueue");
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let len_before = self.items.len();
        let item = self.items.remove(0);
        assert_eq!(self.items.len(), len_before - 1, "Queue length should decrease by 1");
        Some(item)
    }

    fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Queue built from two stacks with amortized O(1) dequeue.
///
/// New items land on `enqueue_stack`. Items leave from the top of
/// `dequeue_stack`; when it runs dry the whole `enqueue_stack` is reversed
/// into it in one move. Every item is transferred at most once between its
/// enqueue and its dequeue, so `n` operations do at most `n` transfers.
///
/// Logical front-to-back order is `dequeue_stack` read top-down followed by
/// `enqueue_stack` read bottom-up.
#[derive(Clone, Debug)]
pub struct StackQueue<T> {
    enqueue_stack: Vec<T>,
    dequeue_stack: Vec<T>,
    transfers: usize,
}

impl<T> Default for StackQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StackQueue<T> {
    /// Create a new, empty queue
    pub fn new() -> Self {
        Self {
            enqueue_stack: Vec::new(),
            dequeue_stack: Vec::new(),
            transfers: 0,
        }
    }

    /// Total number of items moved from the enqueue stack to the dequeue stack so far.
    pub fn transfers(&self) -> usize {
        self.transfers
    }

    /// Move the entire enqueue stack, reversed, onto the empty dequeue stack.
    fn refill(&mut self) {
        assert!(self.dequeue_stack.is_empty(), "Refill requires an empty dequeue stack");

        let moved = self.enqueue_stack.len();
        self.dequeue_stack = self.enqueue_stack.drain(..).rev().collect();
        self.transfers += moved;

        tracing::debug!(moved, total_transfers = self.transfers, "refilled dequeue stack");
        assert!(self.enqueue_stack.is_empty(), "Enqueue stack must be empty after refill");
    }
}

impl<T> Queue for StackQueue<T> {
    type Item = T;

    fn enqueue(&mut self, item: T) {
        self.enqueue_stack.push(item);
        assert!(!self.enqueue_stack.is_empty(), "Queue must have at least one item after enqueue");
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.dequeue_stack.is_empty() {
            if self.enqueue_stack.is_empty() {
                return None;
            }
            self.refill();
        }

        let len_before = self.len();
        let result = self.dequeue_stack.pop();
        // -- post op assertion: queue size decreases if dequeue succeeded
        match result {
            Some(_) => assert_eq!(self.len(), len_before - 1, "Queue length should decrease by 1"),
            None => assert_eq!(self.len(), len_before, "Queue length unchanged when empty"),
        }
        result
    }

    // Never refills: with an empty dequeue stack the oldest arrival is the
    // bottom of the enqueue stack.
    fn peek(&self) -> Option<&T> {
        self.dequeue_stack
            .last()
            .or_else(|| self.enqueue_stack.first())
    }

    fn is_empty(&self) -> bool {
        self.enqueue_stack.is_empty() && self.dequeue_stack.is_empty()
    }

    fn len(&self) -> usize {
        self.enqueue_stack.len() + self.dequeue_stack.len()
    }

    fn refill_transfers(&self) -> Option<usize> {
        Some(self.transfers)
    }
}

/// Thread-safe wrapper around any queue variant
pub type SafeQueue<Q> = Arc<Mutex<Q>>;
