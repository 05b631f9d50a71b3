pub mod buildcore;
pub mod config;
pub mod event;
pub mod log;
pub mod puzzles;
pub mod queue;
pub mod search;
pub mod sort;
pub mod stack;
