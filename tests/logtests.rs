use data_structures_mini::core::buildcore::QueueHarness;
use data_structures_mini::core::config::DemoConfig;
use data_structures_mini::core::event::{EventOp, QueueEvent};
use data_structures_mini::core::log::{append_logs, LogEntry, Logger, State};
use data_structures_mini::core::queue::StackQueue;
use std::collections::HashMap;
use std::path::PathBuf;

#[test]
fn test_append_logs_writes_ndjson() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.ndjson");

    let mut harness = QueueHarness::<StackQueue<String>>::new("stack");
    harness.enqueue("a".to_string());
    harness.dequeue();
    harness.dequeue();

    append_logs(&harness.logs(), &path).unwrap();
    append_logs(&harness.logs(), &path).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let entries: Vec<LogEntry<String>> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(entries.len(), 6, "second call appends");
    assert_eq!(entries[0].op, EventOp::Enqueue);
    assert_eq!(entries[1].state, State::Delivered);
    assert_eq!(entries[1].item.as_deref(), Some("a"));
    assert_eq!(entries[2].state, State::Empty);
    assert_eq!(entries[2].event.transfers, Some(1));
}

#[test]
fn test_append_logs_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    // a directory cannot be opened for append
    let result = append_logs::<String>(&[], dir.path());
    assert!(result.is_err());
}

#[test]
fn test_logger_entries_since() {
    let mut logger: Logger<u32> = Logger::new("q".to_string());
    logger.log(State::Committed, QueueEvent::new_enqueue(1, 1, None));
    let first = logger.entries()[0].local_log_id;
    logger.log(State::Delivered, QueueEvent::new_dequeue(Some(1), 0, None));
    logger.log(State::Empty, QueueEvent::new_peek(None, 0, None));

    let later = logger.entries_since(first);
    assert_eq!(later.len(), 2);
    assert!(later.iter().all(|e| e.local_log_id > first));
    assert!(later[0].to_string().contains("op: dequeue"));
}

#[test]
#[should_panic(expected = "Enqueue must be Committed")]
fn test_logger_rejects_mismatched_state() {
    let mut logger: Logger<u32> = Logger::new("q".to_string());
    logger.log(State::Delivered, QueueEvent::new_enqueue(1, 1, None));
}

#[test]
fn test_config_defaults_and_overrides() {
    let defaults = DemoConfig::from_lookup(|_| None);
    assert_eq!(defaults, DemoConfig::default());
    assert_eq!(defaults.items, 10);

    let vars: HashMap<&str, &str> = HashMap::from([
        ("DSA_LOG_PATH", "/tmp/trace.ndjson"),
        ("DSA_ITEMS", "not-a-number"),
        ("RUST_LOG", "debug"),
        ("DSA_JSON_LOGS", "true"),
    ]);
    let config = DemoConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
    assert_eq!(config.log_path, PathBuf::from("/tmp/trace.ndjson"));
    assert_eq!(config.items, 10);
    assert_eq!(config.log_level, "debug");
    assert!(config.json_logs);
}
