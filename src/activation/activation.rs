use serde::{Deserialize, Serialize};
use std::f64::consts::E;

use crate::math::matrix::Matrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
    Tanh,
    ReLU,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
        }
    }

    /// Derivative with respect to the pre-activation `x`.
    ///
    /// ReLU's derivative at exactly zero is taken as 1.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::ReLU => if x >= 0.0 { 1.0 } else { 0.0 },
        }
    }

    pub fn apply(&self, z: &Matrix) -> Matrix {
        z.map(|x| self.function(x))
    }

    pub fn apply_derivative(&self, z: &Matrix) -> Matrix {
        z.map(|x| self.derivative(x))
    }
}

/// Element-wise activations as matrix methods.
impl Matrix {
    pub fn sigmoid(&self) -> Matrix {
        ActivationFunction::Sigmoid.apply(self)
    }

    pub fn sigmoid_derivative(&self) -> Matrix {
        ActivationFunction::Sigmoid.apply_derivative(self)
    }

    pub fn tanh(&self) -> Matrix {
        ActivationFunction::Tanh.apply(self)
    }

    pub fn tanh_derivative(&self) -> Matrix {
        ActivationFunction::Tanh.apply_derivative(self)
    }

    pub fn relu(&self) -> Matrix {
        ActivationFunction::ReLU.apply(self)
    }

    pub fn relu_derivative(&self) -> Matrix {
        ActivationFunction::ReLU.apply_derivative(self)
    }
}
