// All neural network logic lives in the library (src/lib.rs and its modules).
// This binary trains on a small separable dataset and prints what it learned.
use micro_nn::{accuracy, predict, train_network, Hyperparameters, Matrix};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> micro_nn::Result<()> {
    tracing_subscriber::fmt::init();

    // Label is 1 when x0 + x1 > 1.
    let x = Matrix::from_data(vec![
        vec![0.0, 0.0, 1.0, 1.0, 0.2, 0.9, 0.1, 0.8],
        vec![0.0, 1.0, 0.0, 1.0, 0.1, 0.8, 0.3, 0.9],
    ])?;
    let y = Matrix::from_data(vec![vec![0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]])?;

    let hyperparameters = Hyperparameters::new(5000, 0.5, 4);
    let params = train_network(&x, &y, hyperparameters, &mut StdRng::seed_from_u64(1))?;

    println!("training accuracy: {:.2}", accuracy(&params, &x, &y)?);
    for point in [[0.1, 0.2], [0.9, 0.7]] {
        let input = Matrix::from_data(vec![vec![point[0]], vec![point[1]]])?;
        println!("{:?} -> {}", point, predict(&params, &input)?);
    }

    Ok(())
}
