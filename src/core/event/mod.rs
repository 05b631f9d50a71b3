use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use serde::{Serialize, Deserialize};

static EVENT_COUNTER: AtomicU64 = AtomicU64::new(1); // global counter for unique event IDs

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOp {
    Enqueue,
    Dequeue,
    Peek,
}

impl Display for EventOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EventOp::Enqueue => "enqueue",
            EventOp::Dequeue => "dequeue",
            EventOp::Peek => "peek",
        };
        f.write_str(name)
    }
}

/// One observed queue operation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueueEvent<T> {
    pub global_id: u64,           // unique event ID, increasing in creation order
    pub op: EventOp,
    pub item: Option<T>,
    pub len_after: usize,         // queue length once the op finished
    pub transfers: Option<usize>, // cumulative refill transfers, two-stack queues only
}

impl<T> QueueEvent<T> {

    fn next_id() -> u64 {
        EVENT_COUNTER.fetch_add(1, Ordering::SeqCst)
    }

    pub fn new_enqueue(item: T, len_after: usize, transfers: Option<usize>) -> Self {
        Self {
            global_id: Self::next_id(),
            op: EventOp::Enqueue,
            item: Some(item),
            len_after,
            transfers,
        }
    }

    pub fn new_dequeue(item: Option<T>, len_after: usize, transfers: Option<usize>) -> Self {
        Self {
            global_id: Self::next_id(),
            op: EventOp::Dequeue,
            item,
            len_after,
            transfers,
        }
    }

    pub fn new_peek(item: Option<T>, len_after: usize, transfers: Option<usize>) -> Self {
        Self {
            global_id: Self::next_id(),
            op: EventOp::Peek,
            item,
            len_after,
            transfers,
        }
    }

    /// Whether the operation found the queue empty
    pub fn hit_empty(&self) -> bool {
        self.op != EventOp::Enqueue && self.item.is_none()
    }
}
