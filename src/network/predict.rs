use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::parameters::Parameters;
use crate::network::propagation::forward_propagation;

/// Probabilities strictly above this are classified as `true`.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Classifies a single example. `input` is a `(num_features, 1)` column;
/// only the first example's output is read if more columns are given.
pub fn predict(params: &Parameters, input: &Matrix) -> Result<bool> {
    let (a2, _) = forward_propagation(params, input)?;
    Ok(a2.get(0, 0)? > DECISION_THRESHOLD)
}

/// Classifies every column of `x`.
pub fn predict_batch(params: &Parameters, x: &Matrix) -> Result<Vec<bool>> {
    let (a2, _) = forward_propagation(params, x)?;
    Ok(a2.data()[0].iter().map(|&p| p > DECISION_THRESHOLD).collect())
}

/// Fraction of columns of `x` whose prediction matches the 0/1 label in `y`.
pub fn accuracy(params: &Parameters, x: &Matrix, y: &Matrix) -> Result<f64> {
    if y.rows() != 1 || y.cols() != x.cols() {
        return Err(Error::ShapeMismatch(format!(
            "labels must be 1x{}, got {}",
            x.cols(),
            y.shape()
        )));
    }

    let predictions = predict_batch(params, x)?;
    let correct = predictions
        .iter()
        .zip(y.data()[0].iter())
        .filter(|&(&p, &label)| p == (label > DECISION_THRESHOLD))
        .count();

    Ok(correct as f64 / predictions.len() as f64)
}
