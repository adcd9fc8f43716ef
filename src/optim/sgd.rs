use crate::math::error::MatrixError;
use crate::network::parameters::Parameters;
use crate::network::propagation::{update_parameters, Gradients};

/// Plain full-batch gradient descent.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to `params`. On error `params` is left unchanged.
    pub fn step(&self, params: &mut Parameters, grads: &Gradients) -> Result<(), MatrixError> {
        *params = update_parameters(params, grads, self.learning_rate)?;
        Ok(())
    }
}
