pub mod math;
pub mod activation;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use math::error::MatrixError;
pub use activation::activation::ActivationFunction;
pub use network::parameters::Parameters;
pub use network::predict::{predict, predict_batch, accuracy};
pub use loss::bce::BceLoss;
pub use optim::sgd::Sgd;
pub use train::hyperparameters::Hyperparameters;
pub use train::trainer::train_network;
pub use error::{Error, Result};
