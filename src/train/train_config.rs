use std::sync::mpsc;

use crate::train::cost_report::CostReport;
use crate::train::hyperparameters::Hyperparameters;

/// How often (in iterations) the training loop reports its cost.
pub const REPORT_INTERVAL: usize = 1000;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `hyperparameters`: iteration count, learning rate, hidden layer width
/// - `progress_tx`: optional channel sender; one `CostReport` is sent
///   every `REPORT_INTERVAL` iterations. A dropped
///   receiver is ignored and training carries on.
pub struct TrainConfig {
    pub hyperparameters: Hyperparameters,
    pub progress_tx: Option<mpsc::Sender<CostReport>>,
}

impl TrainConfig {
    /// Creates a `TrainConfig` with no progress channel.
    pub fn new(hyperparameters: Hyperparameters) -> Self {
        TrainConfig {
            hyperparameters,
            progress_tx: None,
        }
    }

    pub fn with_progress(mut self, tx: mpsc::Sender<CostReport>) -> Self {
        self.progress_tx = Some(tx);
        self
    }
}
