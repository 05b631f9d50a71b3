use std::fmt::{Debug, Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use crate::core::event::{EventOp, QueueEvent};
use serde::{Serialize, Deserialize};
use thiserror::Error;

static LOG_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Outcome of a queue operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    /// Item accepted by enqueue
    Committed,
    /// Item handed out by dequeue
    Delivered,
    /// Front item seen by peek
    Observed,
    /// Dequeue or peek found nothing
    Empty,
}

/// Log entry recording an operation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogEntry<T> {
    pub local_log_id: u64,
    pub queue: String,             // label of the queue that ran the op
    pub op: EventOp,
    pub item: Option<T>,           // The item being enqueued/dequeued/peeked
    pub state: State,
    pub event: QueueEvent<T>,
}

impl<T: Debug> Display for LogEntry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogEntry {{ local_log_id: {}, queue: {}, op: {}, item: {:?}, state: {:?}, event_global_id: {}, len_after: {} }}",
            self.local_log_id,
            self.queue,
            self.op,
            self.item,
            self.state,
            self.event.global_id,
            self.event.len_after,
        )
    }
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to write log file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize log entry: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
/// Logger storing all entries for one queue
pub struct Logger<T> {
    pub(crate) entries: Vec<LogEntry<T>>,
    queue: String,
}

impl<T: Clone> Logger<T> {
    pub fn new(queue: String) -> Self {
        Self { entries: Vec::new(), queue }
    }

    /// Log an operation
    pub fn log(&mut self, state: State, event: QueueEvent<T>) {
        // --- Negative-space assertion: state must match operation ---
        match event.op {
            EventOp::Enqueue => assert!(
                matches!(state, State::Committed),
                "Enqueue must be Committed"
            ),
            EventOp::Dequeue => assert!(
                matches!(state, State::Delivered | State::Empty),
                "Dequeue must result in Delivered or Empty"
            ),
            EventOp::Peek => assert!(
                matches!(state, State::Observed | State::Empty),
                "Peek must result in Observed or Empty"
            ),
        }
        assert_eq!(
            state == State::Empty,
            event.hit_empty(),
            "Empty state iff the operation returned no item"
        );

        let local_log_id = LOG_ID_COUNTER.fetch_add(1, Ordering::SeqCst);

        // --- Log entry insertion ---
        let before = self.entries.len();
        self.entries.push(LogEntry {
            local_log_id,
            queue: self.queue.clone(),
            op: event.op,
            item: event.item.clone(),
            state,
            event,
        });

        assert_eq!(
            self.entries.len(),
            before + 1,
            "Logger must increase by exactly one entry"
        );
    }

    pub fn entries(&self) -> &[LogEntry<T>] {
        &self.entries
    }

    /// Entries logged after the given local log id
    pub fn entries_since(&self, local_log_id: u64) -> Vec<LogEntry<T>> {
        self.entries
            .iter()
            .filter(|entry| entry.local_log_id > local_log_id)
            .cloned()
            .collect()
    }
}

/// Append entries to `path` as NDJSON, one object per line.
pub fn append_logs<T: Serialize>(log: &[LogEntry<T>], path: impl AsRef<Path>) -> Result<(), LogError> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path.as_ref())?;

    for entry in log {
        let json = serde_json::to_string(entry)?;
        writeln!(file, "{}", json)?;
    }
    tracing::debug!(entries = log.len(), path = %path.as_ref().display(), "appended queue logs");
    Ok(())
}
