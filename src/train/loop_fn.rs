use std::time::Instant;

use rand::Rng;
use tracing::info;

use crate::error::{Error, Result};
use crate::loss::bce::BceLoss;
use crate::math::matrix::Matrix;
use crate::network::parameters::Parameters;
use crate::network::propagation::{backward_propagation, forward_propagation};
use crate::optim::sgd::Sgd;
use crate::train::cost_report::CostReport;
use crate::train::train_config::{TrainConfig, REPORT_INTERVAL};

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains a fresh network on `x` / `y` and returns the learned parameters.
///
/// # Arguments
/// - `x`: features, `(num_features, num_examples)`; one example per column
/// - `y`: 0/1 labels, `(1, num_examples)`
/// - `config`: hyperparameters and optional progress channel
/// - `rng`: source for the initial weights
///
/// Runs exactly `num_iterations` rounds of forward pass, cost, backward pass
/// and update; there is no early stopping. Every `REPORT_INTERVAL`-th
/// iteration (starting at 0) the cost is logged and, if configured, sent on
/// `progress_tx`. A closed channel does not stop training.
///
/// # Errors
/// Inputs and hyperparameters are validated before anything is allocated.
/// Any matrix error raised mid-run is returned as-is.
pub fn train_loop<R: Rng + ?Sized>(
    x: &Matrix,
    y: &Matrix,
    config: &TrainConfig,
    rng: &mut R,
) -> Result<Parameters> {
    let hp = &config.hyperparameters;
    hp.validate()?;
    validate_inputs(x, y)?;

    let mut params = Parameters::initialize(hp, x.rows(), rng)?;
    let optimizer = Sgd::new(hp.learning_rate);
    let t_start = Instant::now();

    info!(
        iterations = hp.num_iterations,
        learning_rate = hp.learning_rate,
        hidden_units = hp.hidden_units,
        features = x.rows(),
        examples = x.cols(),
        "training started"
    );

    for iteration in 0..hp.num_iterations {
        let (a2, cache) = forward_propagation(&params, x)?;
        let cost = BceLoss::cost(&a2, y)?;
        let grads = backward_propagation(&params, &cache, x, y)?;
        optimizer.step(&mut params, &grads)?;

        if iteration % REPORT_INTERVAL == 0 {
            info!("Cost after {} iterations: {:.6}", iteration, cost);

            if let Some(ref tx) = config.progress_tx {
                // Reporting is advisory; a dropped receiver is not an error.
                let _ = tx.send(CostReport {
                    iteration,
                    total_iterations: hp.num_iterations,
                    cost,
                    elapsed_ms: t_start.elapsed().as_millis() as u64,
                });
            }
        }
    }

    info!(elapsed_ms = t_start.elapsed().as_millis() as u64, "training finished");
    Ok(params)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// `y` must be a single row with one label per column of `x`.
fn validate_inputs(x: &Matrix, y: &Matrix) -> Result<()> {
    if y.rows() != 1 {
        return Err(Error::ShapeMismatch(format!(
            "labels must have exactly 1 row, got {}",
            y.shape()
        )));
    }
    if y.cols() != x.cols() {
        return Err(Error::ShapeMismatch(format!(
            "{} examples in features but {} labels",
            x.cols(),
            y.cols()
        )));
    }
    Ok(())
}
