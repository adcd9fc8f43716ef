use rand::Rng;

use crate::error::Result;
use crate::math::matrix::Matrix;
use crate::network::parameters::Parameters;
use crate::train::hyperparameters::Hyperparameters;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Trains without a progress channel. See `train_loop`.
pub fn train_network<R: Rng + ?Sized>(
    x: &Matrix,
    y: &Matrix,
    hyperparameters: Hyperparameters,
    rng: &mut R,
) -> Result<Parameters> {
    train_loop(x, y, &TrainConfig::new(hyperparameters), rng)
}
