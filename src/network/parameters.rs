use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::train::hyperparameters::Hyperparameters;

/// Scale applied to the uniform draws that seed `w1` and `w2`.
///
/// Large initial weights push tanh and sigmoid into saturation, where the
/// gradients vanish and learning stalls.
pub const INIT_SCALE: f64 = 0.01;

/// Learned parameters of the network.
///
/// - `w1`: hidden weights, `(hidden_units, num_features)`
/// - `b1`: hidden biases, `(hidden_units, 1)`
/// - `w2`: output weights, `(1, hidden_units)`
/// - `b2`: output bias, `(1, 1)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub w1: Matrix,
    pub b1: Matrix,
    pub w2: Matrix,
    pub b2: Matrix,
}

impl Parameters {
    /// Small random weights, zero biases.
    pub fn initialize<R: Rng + ?Sized>(
        hyperparameters: &Hyperparameters,
        num_features: usize,
        rng: &mut R,
    ) -> Result<Parameters> {
        let hidden = hyperparameters.hidden_units;

        let params = Parameters {
            w1: Matrix::random(hidden, num_features, INIT_SCALE, rng)?,
            b1: Matrix::zeros(hidden, 1)?,
            w2: Matrix::random(1, hidden, INIT_SCALE, rng)?,
            b2: Matrix::zeros(1, 1)?,
        };

        debug!(hidden_units = hidden, num_features, "initialized parameters");
        Ok(params)
    }

    pub fn num_features(&self) -> usize {
        self.w1.cols()
    }

    pub fn hidden_units(&self) -> usize {
        self.w1.rows()
    }

    /// Serializes the parameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Checks that the four matrices form one network: `w1` is `h x n`,
    /// `b1` is `h x 1`, `w2` is `1 x h` and `b2` is `1 x 1`.
    pub fn validate(&self) -> Result<()> {
        let hidden = self.w1.rows();
        let expected = [
            ("b1", &self.b1, (hidden, 1)),
            ("w2", &self.w2, (1, hidden)),
            ("b2", &self.b2, (1, 1)),
        ];

        for (name, matrix, (rows, cols)) in expected {
            if matrix.rows() != rows || matrix.cols() != cols {
                return Err(Error::ShapeMismatch(format!(
                    "{name} must be {rows}x{cols} for {hidden} hidden units, got {}",
                    matrix.shape()
                )));
            }
        }
        Ok(())
    }

    /// Deserializes and validates parameters from a JSON file previously
    /// written by `save_json`.
    pub fn load_json(path: &str) -> Result<Parameters> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let params: Parameters = serde_json::from_reader(reader)?;
        params.validate()?;
        Ok(params)
    }
}
