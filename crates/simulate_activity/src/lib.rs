// crates/simulate_activity/src/lib.rs

//! Periodically appends and removes a marker line in a random source file
//! so that editor-activity trackers keep seeing file writes.

pub mod config;
pub mod cycle;

pub use config::{ActivityConfig, INTERVAL, RESTORE_DELAY};
pub use cycle::{run_cycle, ActivityLoop, CycleOutcome};
