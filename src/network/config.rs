use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Shape and learning rate of a [`Network`](crate::Network).
///
/// Kept separate from the network itself so a configuration can be stored or
/// compared independently of any trained weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Width of the external input vector.
    pub input_size: usize,
    /// Neuron count of the hidden layer.
    pub hidden_neurons: usize,
    /// Neuron count of the output layer.
    pub output_neurons: usize,
    /// Step size applied to every weight and bias update.
    pub learning_rate: f64,
}

impl NetworkConfig {
    pub fn new(
        input_size: usize,
        hidden_neurons: usize,
        output_neurons: usize,
        learning_rate: f64,
    ) -> NetworkConfig {
        NetworkConfig {
            input_size,
            hidden_neurons,
            output_neurons,
            learning_rate,
        }
    }

    /// Rejects zero-sized layers and non-positive (or NaN) learning rates.
    /// Called at construction so a bad configuration never reaches the first
    /// forward or train call.
    pub fn validate(&self) -> Result<(), Error> {
        if self.input_size == 0 {
            return Err(Error::InvalidConfiguration(
                "input_size must be at least 1".to_string(),
            ));
        }
        if self.hidden_neurons == 0 {
            return Err(Error::InvalidConfiguration(
                "hidden_neurons must be at least 1".to_string(),
            ));
        }
        if self.output_neurons == 0 {
            return Err(Error::InvalidConfiguration(
                "output_neurons must be at least 1".to_string(),
            ));
        }
        if !(self.learning_rate > 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
