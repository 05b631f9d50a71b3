pub use crate::core::{
    queue::{ArrayQueue, Queue, StackQueue},
    log::{LogEntry, Logger, State},
    event::{EventOp, QueueEvent}
};

/// Drives any queue variant and records every operation in a [`Logger`].
pub struct QueueHarness<Q: Queue> {
    name: String,
    queue: Q,
    logger: Logger<Q::Item>,
}

impl<Q> QueueHarness<Q>
where
    Q: Queue,
    Q::Item: Clone + std::fmt::Debug,
{
    /// Create a harness around an empty queue
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_queue(name, Q::default())
    }

    /// Create a harness around an existing queue
    pub fn with_queue(name: impl Into<String>, queue: Q) -> Self {
        let name = name.into();
        Self {
            logger: Logger::new(name.clone()),
            name,
            queue,
        }
    }

    /// Enqueue with logging
    pub fn enqueue(&mut self, item: Q::Item) -> QueueEvent<Q::Item> {
        self.queue.enqueue(item.clone());
        let event = QueueEvent::new_enqueue(item, self.queue.len(), self.queue.refill_transfers());
        tracing::trace!(queue = %self.name, item = ?event.item, len = event.len_after, "enqueue");
        self.logger.log(State::Committed, event.clone());
        event
    }

    /// Dequeue an item; an empty queue is logged, not an error
    pub fn dequeue(&mut self) -> (Option<Q::Item>, QueueEvent<Q::Item>) {
        let item = self.queue.dequeue();
        let state = if item.is_some() { State::Delivered } else { State::Empty };
        let event = QueueEvent::new_dequeue(item.clone(), self.queue.len(), self.queue.refill_transfers());
        tracing::trace!(queue = %self.name, item = ?item, len = event.len_after, "dequeue");
        self.logger.log(state, event.clone());
        (item, event)
    }

    /// Look at the front item
    pub fn peek(&mut self) -> Option<Q::Item> {
        let item = self.queue.peek().cloned();
        let state = if item.is_some() { State::Observed } else { State::Empty };
        let event = QueueEvent::new_peek(item.clone(), self.queue.len(), self.queue.refill_transfers());
        self.logger.log(state, event);
        item
    }

    /// Dequeue until empty, returning items in FIFO order
    pub fn drain(&mut self) -> Vec<Q::Item> {
        let mut out = Vec::with_capacity(self.queue.len());
        while let (Some(item), _) = self.dequeue() {
            out.push(item);
        }
        out
    }

    /// Get current queue state
    pub fn queue_state(&self) -> (usize, bool) {
        (self.queue.len(), self.queue.is_empty())
    }

    /// Expose logs
    pub fn logs(&self) -> Vec<LogEntry<Q::Item>> {
        self.logger.entries().to_vec()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn queue(&self) -> &Q {
        &self.queue
    }

    pub fn into_inner(self) -> Q {
        self.queue
    }
}

/// Outputs of running the same script against both queue variants
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison<T> {
    pub array: Vec<T>,
    pub stack: Vec<T>,
    pub stack_transfers: usize,
}

impl<T: PartialEq> Comparison<T> {
    pub fn agree(&self) -> bool {
        self.array == self.stack
    }
}

/// Run one script on a queue: enqueue the first half, dequeue one, enqueue the rest, drain.
fn run_script<Q>(harness: &mut QueueHarness<Q>, items: &[Q::Item]) -> Vec<Q::Item>
where
    Q: Queue,
    Q::Item: Clone + std::fmt::Debug,
{
    let (head, tail) = items.split_at(items.len() / 2);
    let mut out = Vec::with_capacity(items.len());

    for item in head {
        harness.enqueue(item.clone());
    }
    if let (Some(item), _) = harness.dequeue() {
        out.push(item);
    }
    for item in tail {
        harness.enqueue(item.clone());
    }
    out.extend(harness.drain());
    out
}

/// Drive an `ArrayQueue` and a `StackQueue` through the same script.
pub fn compare_variants<T: Clone + std::fmt::Debug>(items: &[T]) -> Comparison<T> {
    let mut array = QueueHarness::<ArrayQueue<T>>::new("array");
    let mut stack = QueueHarness::<StackQueue<T>>::new("stack");

    let array_out = run_script(&mut array, items);
    let stack_out = run_script(&mut stack, items);

    Comparison {
        array: array_out,
        stack: stack_out,
        stack_transfers: stack.queue().transfers(),
    }
}
