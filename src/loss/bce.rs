use crate::math::error::MatrixError;
use crate::math::matrix::Matrix;

/// Binary cross-entropy over a `1 x m` row of sigmoid outputs.
pub struct BceLoss;

/// Probabilities are clamped into `[EPS, 1 - EPS]` before `ln`, so a
/// saturated wrong prediction costs `-ln(EPS)` (about 27.63) instead of inf.
pub const EPS: f64 = 1e-12;

impl BceLoss {
    /// Scalar cost: `-(1/m) * sum(y * ln(a) + (1 - y) * ln(1 - a))`, with
    /// `m = expected.cols()`.
    pub fn cost(predicted: &Matrix, expected: &Matrix) -> Result<f64, MatrixError> {
        let m = expected.cols() as f64;
        let ones = Matrix::filled(expected.rows(), expected.cols(), 1.0)?;
        let a = predicted.map(|p| p.clamp(EPS, 1.0 - EPS));

        let y_log_a = a.ln().hadamard(expected)?;
        let one_minus_y = ones.subtract(expected)?;
        let log_one_minus_a = ones.subtract(&a)?.ln();
        let log_probs = y_log_a.add(&one_minus_y.hadamard(&log_one_minus_a)?)?;

        // Single output unit, so summing the one row gives the total.
        log_probs.sum_rows().scale(-1.0 / m).get(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[f64]) -> Matrix {
        Matrix::from_data(vec![values.to_vec()]).unwrap()
    }

    #[test]
    fn matches_closed_form() {
        let a = row(&[0.8, 0.3, 0.6]);
        let y = row(&[1.0, 0.0, 1.0]);
        let expected = -((0.8f64).ln() + (0.7f64).ln() + (0.6f64).ln()) / 3.0;
        assert!((BceLoss::cost(&a, &y).unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn uninformed_prediction_costs_ln_two() {
        let a = row(&[0.5, 0.5]);
        let y = row(&[0.0, 1.0]);
        assert!((BceLoss::cost(&a, &y).unwrap() - std::f64::consts::LN_2).abs() < 1e-12);
    }

    #[test]
    fn saturated_predictions_are_clamped() {
        let wrong = BceLoss::cost(&row(&[0.0]), &row(&[1.0])).unwrap();
        assert!(wrong.is_finite());
        assert!((wrong + EPS.ln()).abs() < 1e-9);

        let right = BceLoss::cost(&row(&[1.0, 0.0]), &row(&[1.0, 0.0])).unwrap();
        assert!(right >= 0.0 && right < 1e-9);
    }

    #[test]
    fn shape_mismatch_is_an_error() {
        let err = BceLoss::cost(&row(&[0.5, 0.5, 0.5]), &row(&[1.0, 0.0])).unwrap_err();
        assert!(matches!(err, MatrixError::DimensionMismatch { .. }));
    }
}
