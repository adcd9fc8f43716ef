pub mod cost_report;
pub mod hyperparameters;
pub mod loop_fn;
pub mod train_config;
pub mod trainer;

pub use cost_report::CostReport;
pub use hyperparameters::Hyperparameters;
pub use loop_fn::train_loop;
pub use train_config::{TrainConfig, REPORT_INTERVAL};
pub use trainer::train_network;
