use std::sync::mpsc;

use micro_nn::network::{backward_propagation, forward_propagation};
use micro_nn::train::{train_loop, CostReport, TrainConfig};
use micro_nn::{
    accuracy, predict, predict_batch, train_network, Error, Hyperparameters, Matrix, MatrixError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn m(data: Vec<Vec<f64>>) -> Matrix {
    Matrix::from_data(data).unwrap()
}

/// Label is 1 when x0 + x1 > 1.
fn separable() -> (Matrix, Matrix) {
    let x = m(vec![
        vec![0.0, 0.0, 1.0, 1.0, 0.2, 0.9, 0.1, 0.8],
        vec![0.0, 1.0, 0.0, 1.0, 0.1, 0.8, 0.3, 0.9],
    ]);
    let y = m(vec![vec![0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0]]);
    (x, y)
}

#[test]
fn single_hidden_unit_learns_identity() {
    let x = m(vec![vec![0.0, 1.0]]);
    let y = m(vec![vec![0.0, 1.0]]);

    for seed in 0..5 {
        let hp = Hyperparameters::new(5000, 1.0, 1);
        let params = train_network(&x, &y, hp, &mut StdRng::seed_from_u64(seed)).unwrap();

        assert!(!predict(&params, &m(vec![vec![0.0]])).unwrap(), "seed {seed}");
        assert!(predict(&params, &m(vec![vec![1.0]])).unwrap(), "seed {seed}");
    }
}

#[test]
fn cost_does_not_increase_on_separable_data() {
    let (x, y) = separable();
    let (tx, rx) = mpsc::channel();
    let config = TrainConfig::new(Hyperparameters::new(5001, 0.5, 4)).with_progress(tx);

    let params = train_loop(&x, &y, &config, &mut StdRng::seed_from_u64(2024)).unwrap();
    drop(config);

    let costs: Vec<f64> = rx.iter().map(|r: CostReport| r.cost).collect();
    assert_eq!(costs.len(), 6);
    for pair in costs.windows(2) {
        assert!(pair[1] <= pair[0], "cost went up: {costs:?}");
    }
    assert!(costs[costs.len() - 1] < 0.1 * costs[0]);

    assert_eq!(accuracy(&params, &x, &y).unwrap(), 1.0);
    assert_eq!(
        predict_batch(&params, &x).unwrap(),
        vec![false, false, false, true, false, true, false, true]
    );
}

#[test]
fn predict_rejects_wrong_feature_count() {
    let (x, y) = separable();
    let hp = Hyperparameters::new(10, 0.5, 3);
    let params = train_network(&x, &y, hp, &mut StdRng::seed_from_u64(0)).unwrap();

    let three_features = Matrix::zeros(3, 1).unwrap();
    let err = predict(&params, &three_features).unwrap_err();
    assert!(matches!(err, Error::Matrix(MatrixError::DimensionMismatch { .. })));

    let (_, cache) = forward_propagation(&params, &x).unwrap();
    let wrong_labels = Matrix::zeros(1, 3).unwrap();
    assert!(backward_propagation(&params, &cache, &x, &wrong_labels).is_err());
}

#[test]
fn train_network_rejects_label_count_mismatch() {
    let (x, _) = separable();
    let hp = Hyperparameters::new(10, 0.5, 3);

    let short_labels = m(vec![vec![0.0, 1.0, 0.0]]);
    let err = train_network(&x, &short_labels, hp, &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch(_)));

    let two_label_rows = Matrix::zeros(2, x.cols()).unwrap();
    let err = train_network(&x, &two_label_rows, hp, &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(err, Error::ShapeMismatch(_)));
}

#[test]
fn same_seed_same_model() {
    let (x, y) = separable();
    let hp = Hyperparameters::new(300, 0.5, 3);
    let a = train_network(&x, &y, hp, &mut StdRng::seed_from_u64(77)).unwrap();
    let b = train_network(&x, &y, hp, &mut StdRng::seed_from_u64(77)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn trained_parameters_survive_json() {
    let (x, y) = separable();
    let hp = Hyperparameters::new(200, 0.5, 2);
    let params = train_network(&x, &y, hp, &mut StdRng::seed_from_u64(4)).unwrap();

    let file = format!("micro_nn_trained_parameters_{}.json", std::process::id());
    let path = std::env::temp_dir().join(file);
    let path = path.to_str().unwrap();
    params.save_json(path).unwrap();
    let loaded = micro_nn::Parameters::load_json(path).unwrap();
    std::fs::remove_file(path).unwrap();

    assert_eq!(loaded, params);
    assert_eq!(predict_batch(&loaded, &x).unwrap(), predict_batch(&params, &x).unwrap());
}
