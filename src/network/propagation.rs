use crate::math::error::MatrixError;
use crate::math::matrix::Matrix;
use crate::network::parameters::Parameters;

/// Forward-pass intermediates that the backward pass reuses.
#[derive(Debug, Clone)]
pub struct Cache {
    pub z1: Matrix,
    pub a1: Matrix,
    pub z2: Matrix,
    pub a2: Matrix,
}

/// One gradient per parameter, same shapes as `Parameters`.
#[derive(Debug, Clone)]
pub struct Gradients {
    pub dw1: Matrix,
    pub db1: Matrix,
    pub dw2: Matrix,
    pub db2: Matrix,
}

/// Forward pass over every column (example) of `x`.
///
/// `Z1 = W1·X + b1`, `A1 = tanh(Z1)`, `Z2 = W2·A1 + b2`, `A2 = sigmoid(Z2)`.
/// Biases are broadcast across examples with `Matrix::add_column`.
/// Returns `A2` (one probability per example) and the cache.
pub fn forward_propagation(
    params: &Parameters,
    x: &Matrix,
) -> Result<(Matrix, Cache), MatrixError> {
    let z1 = params.w1.dot(x)?.add_column(&params.b1)?;
    let a1 = z1.tanh();
    let z2 = params.w2.dot(&a1)?.add_column(&params.b2)?;
    let a2 = z2.sigmoid();

    let cache = Cache { z1, a1, z2, a2: a2.clone() };
    Ok((a2, cache))
}

/// Backprop for a tanh hidden layer and sigmoid output under cross-entropy.
///
/// ```text
/// dZ2 = A2 - Y
/// dW2 = dZ2·A1ᵀ / m          db2 = sum_rows(dZ2) / m
/// dZ1 = (W2ᵀ·dZ2) ⊙ tanh'(Z1)
/// dW1 = dZ1·Xᵀ / m           db1 = sum_rows(dZ1) / m
/// ```
pub fn backward_propagation(
    params: &Parameters,
    cache: &Cache,
    x: &Matrix,
    y: &Matrix,
) -> Result<Gradients, MatrixError> {
    let inv_m = 1.0 / y.cols() as f64;

    let dz2 = cache.a2.subtract(y)?;
    let dw2 = dz2.dot(&cache.a1.transpose())?.scale(inv_m);
    let db2 = dz2.sum_rows().scale(inv_m);

    let dz1 = params.w2.transpose().dot(&dz2)?.hadamard(&cache.z1.tanh_derivative())?;
    let dw1 = dz1.dot(&x.transpose())?.scale(inv_m);
    let db1 = dz1.sum_rows().scale(inv_m);

    Ok(Gradients { dw1, db1, dw2, db2 })
}

/// `θ ← θ - learning_rate · dθ` for all four parameters.
///
/// Every new matrix is computed before any is assigned, so a shape error
/// leaves `params` untouched.
pub fn update_parameters(
    params: &Parameters,
    grads: &Gradients,
    learning_rate: f64,
) -> Result<Parameters, MatrixError> {
    Ok(Parameters {
        w1: params.w1.subtract(&grads.dw1.scale(learning_rate))?,
        b1: params.b1.subtract(&grads.db1.scale(learning_rate))?,
        w2: params.w2.subtract(&grads.dw2.scale(learning_rate))?,
        b2: params.b2.subtract(&grads.db2.scale(learning_rate))?,
    })
}
