use anyhow::Context;
use data_structures_mini::core::buildcore::{compare_variants, Queue, QueueHarness};
use data_structures_mini::core::config::DemoConfig;
use data_structures_mini::core::log::append_logs;
use data_structures_mini::core::puzzles::{max_profit, two_sum};
use data_structures_mini::core::queue::{ArrayQueue, StackQueue};
use data_structures_mini::core::search::binary_search;
use data_structures_mini::core::sort::{bubble_sort, insertion_sort, selection_sort};
use data_structures_mini::core::stack::{parens_balanced, parens_balanced_counter, Stack};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(config: &DemoConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid log level {:?}", config.log_level))?;

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()?;
    }
    Ok(())
}

/// Same walk-through for any queue variant
fn demonstrate_queue<Q: Queue<Item = String>>(name: &str) -> QueueHarness<Q> {
    let mut harness = QueueHarness::<Q>::new(name);
    for pet in ["Tippy", "Toonsis", "Grumpy"] {
        harness.enqueue(pet.to_string());
    }
    let (first, _) = harness.dequeue();
    let front = harness.peek();
    tracing::info!(queue = name, dequeued = ?first, peek = ?front, "queue demo");

    harness.enqueue("Happy".to_string());
    let rest = harness.drain();
    tracing::info!(queue = name, drained = ?rest, state = ?harness.queue_state(), "queue drained");
    harness
}

fn demonstrate_stack() {
    let mut stack: Stack<String> = ["Kraig", "Christine", "Tippy"]
        .into_iter()
        .map(String::from)
        .collect();
    tracing::info!(stack = %stack, peek = ?stack.peek(), "stack demo");
    let popped = stack.pop();
    tracing::info!(popped = ?popped, stack = %stack, "stack after pop");

    let equal = Stack::from([1, 2, 3]) == Stack::from(vec![1, 2, 3]);
    let reversed = Stack::from([1, 2, 3]) == Stack::from([3, 2, 1]);
    tracing::info!(equal, reversed, "stack equality");

    for text in ["(test) (what) up", "(test) (what) up)"] {
        tracing::info!(
            text,
            with_stack = parens_balanced(text),
            with_counter = parens_balanced_counter(text),
            "balanced parentheses"
        );
    }
}

fn demonstrate_algorithms() {
    let numbers = [5, 1, 76, 10, 5, 7, 2, 5, 2, 1000];
    let sorted = selection_sort(&numbers);
    let agree = bubble_sort(&numbers) == sorted && insertion_sort(&numbers) == sorted;
    tracing::info!(input = ?numbers, sorted = ?sorted, agree, "sorts");

    tracing::info!(index = ?binary_search(&sorted, &76), "binary search for 76");
    tracing::info!(profit = max_profit(&[7, 1, 5, 3, 6, 4]), "max profit");
    tracing::info!(pair = ?two_sum(&[1, 6, 7, 9, 10, 20], 29), "two sum");
}

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::from_env();
    init_tracing(&config)?;

    let array = demonstrate_queue::<ArrayQueue<String>>("array");
    let stack = demonstrate_queue::<StackQueue<String>>("stack");

    let items: Vec<String> = (1..=config.items).map(|i| format!("Item {}", i)).collect();
    let comparison = compare_variants(&items);
    tracing::info!(
        items = config.items,
        agree = comparison.agree(),
        stack_transfers = comparison.stack_transfers,
        "queue variants compared"
    );

    demonstrate_stack();
    demonstrate_algorithms();

    // Append the logs for all queues as NDJSON
    for harness in [array.logs(), stack.logs()] {
        append_logs(&harness, &config.log_path)
            .with_context(|| format!("writing {}", config.log_path.display()))?;
    }
    tracing::info!(path = %config.log_path.display(), "queue logs written");
    Ok(())
}
