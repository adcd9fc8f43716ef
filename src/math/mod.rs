pub mod error;
pub mod matrix;

pub use error::{Axis, MatrixError, Operation, Shape};
pub use matrix::Matrix;
