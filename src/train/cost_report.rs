use serde::{Deserialize, Serialize};

/// Cost checkpoint emitted by `train_loop` every `REPORT_INTERVAL` iterations.
///
/// Purely informational: whoever receives these cannot influence training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    /// 0-based iteration the cost was measured at (before that iteration's update).
    pub iteration: usize,
    /// Total iterations requested for this run.
    pub total_iterations: usize,
    /// Cross-entropy cost over the full training set.
    pub cost: f64,
    /// Wall-clock time since training started, in milliseconds.
    pub elapsed_ms: u64,
}
