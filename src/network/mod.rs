pub mod parameters;
pub mod predict;
pub mod propagation;

pub use parameters::Parameters;
pub use predict::{accuracy, predict, predict_batch};
pub use propagation::{
    backward_propagation, forward_propagation, update_parameters, Cache, Gradients,
};
