use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Knobs that shape a training run. Fixed before training starts.
///
/// Fields:
/// - `num_iterations`: number of full-batch gradient descent steps
/// - `learning_rate`: step size applied to every gradient
/// - `hidden_units`: neurons in the single hidden layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    pub num_iterations: usize,
    pub learning_rate: f64,
    pub hidden_units: usize,
}

impl Hyperparameters {
    pub fn new(num_iterations: usize, learning_rate: f64, hidden_units: usize) -> Self {
        Hyperparameters { num_iterations, learning_rate, hidden_units }
    }

    /// Rejects a zero-width hidden layer and non-positive or non-finite
    /// learning rates. Zero iterations is allowed and simply returns the
    /// initial parameters.
    pub fn validate(&self) -> Result<()> {
        if self.hidden_units < 1 {
            return Err(Error::InvalidHyperparameter {
                name: "hidden_units",
                reason: "must be at least 1".to_string(),
            });
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(Error::InvalidHyperparameter {
                name: "learning_rate",
                reason: format!("must be finite and positive, got {}", self.learning_rate),
            });
        }
        Ok(())
    }

    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Loads and validates hyperparameters written by `save_json`.
    pub fn load_json(path: &str) -> Result<Hyperparameters> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let hyperparameters: Hyperparameters = serde_json::from_reader(reader)?;
        hyperparameters.validate()?;
        Ok(hyperparameters)
    }
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Hyperparameters { num_iterations: 10_000, learning_rate: 1.2, hidden_units: 4 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Hyperparameters::default().validate().is_ok());
        assert!(Hyperparameters::new(0, 0.1, 1).validate().is_ok());
    }

    #[test]
    fn rejects_empty_hidden_layer() {
        let err = Hyperparameters::new(10, 0.1, 0).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidHyperparameter { name: "hidden_units", .. }));
    }

    #[test]
    fn rejects_bad_learning_rates() {
        for lr in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            let err = Hyperparameters::new(10, lr, 2).validate().unwrap_err();
            assert!(matches!(err, Error::InvalidHyperparameter { name: "learning_rate", .. }));
        }
    }

    #[test]
    fn json_round_trip() {
        let file = format!("micro_nn_hyperparameters_{}.json", std::process::id());
        let path = std::env::temp_dir().join(file);
        let path = path.to_str().unwrap();

        let hp = Hyperparameters::new(2500, 0.75, 3);
        hp.save_json(path).unwrap();
        assert_eq!(Hyperparameters::load_json(path).unwrap(), hp);

        let zero_hidden = r#"{"num_iterations":5,"learning_rate":0.1,"hidden_units":0}"#;
        std::fs::write(path, zero_hidden).unwrap();
        assert!(Hyperparameters::load_json(path).is_err());

        std::fs::remove_file(path).unwrap();
    }
}
