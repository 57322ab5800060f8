use std::io;

use serde::Serialize;

use crate::dataset::parity::{parity_truth_table, TrainingExample};
use crate::error::Error;
use crate::network::config::NetworkConfig;
use crate::network::network::Network;
use crate::network::snapshot::NetworkParameters;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::{train_until_converged, TrainReport};

/// Raw outputs at or above this read as class 1.
const CLASSIFICATION_CUTOFF: f64 = 0.5;

/// Result of running one truth-table row through the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub inputs: Vec<f64>,
    pub expected: f64,
    pub raw_output: f64,
    pub predicted: f64,
}

/// Owns one network together with the parity truth table it trains on.
///
/// This is the hosting-side counterpart of the engine: a plain value rather
/// than a process-wide singleton. Whoever constructs the session owns it and
/// serializes access to it; `train`, `reinitialize` and `load` mutate the
/// network in place with no internal locking.
pub struct ParitySession {
    config: NetworkConfig,
    network: Network,
    training_set: Vec<TrainingExample>,
}

impl ParitySession {
    /// Builds a freshly initialized network plus the full `2^input_size`
    /// parity truth table.
    ///
    /// The parity label is a single value, so `output_neurons` must be 1;
    /// anything else is rejected up front rather than failing at the first
    /// training call.
    pub fn new(config: NetworkConfig) -> Result<ParitySession, Error> {
        if config.output_neurons != 1 {
            return Err(Error::InvalidConfiguration(format!(
                "parity has a single output, got output_neurons = {}",
                config.output_neurons
            )));
        }
        let network = Network::new(&config)?;
        let training_set = parity_truth_table(config.input_size);
        log::info!(
            "initialized {}-{}-{} network, lr = {}, {} training rows",
            config.input_size,
            config.hidden_neurons,
            config.output_neurons,
            config.learning_rate,
            training_set.len()
        );
        Ok(ParitySession {
            config,
            network,
            training_set,
        })
    }

    /// Discards the current network and training set wholesale and rebuilds
    /// both from `config`. There is no incremental retraining.
    pub fn reinitialize(&mut self, config: NetworkConfig) -> Result<(), Error> {
        *self = ParitySession::new(config)?;
        Ok(())
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn training_set(&self) -> &[TrainingExample] {
        &self.training_set
    }

    /// Runs the training loop over the owned truth table with the default
    /// check cadence.
    pub fn train(&mut self, epochs: usize, error_threshold: f64) -> Result<TrainReport, Error> {
        let config = TrainConfig::new(epochs, error_threshold);
        train_until_converged(&mut self.network, &self.training_set, &config)
    }

    /// Forward-propagates one input vector through the owned network.
    pub fn forward(&self, inputs: &[f64]) -> Result<Vec<f64>, Error> {
        self.network.forward(inputs)
    }

    /// Classifies every truth-table row with the current weights.
    pub fn evaluate(&self) -> Result<Vec<Evaluation>, Error> {
        self.training_set
            .iter()
            .map(|example| {
                let outputs = self.network.forward(&example.inputs)?;
                let raw_output = outputs[0];
                Ok(Evaluation {
                    inputs: example.inputs.clone(),
                    expected: example.expected[0],
                    raw_output,
                    predicted: if raw_output >= CLASSIFICATION_CUTOFF {
                        1.0
                    } else {
                        0.0
                    },
                })
            })
            .collect()
    }

    /// Read-only snapshot of every weight and bias.
    pub fn parameters(&self) -> NetworkParameters {
        self.network.parameters()
    }

    /// Writes the current network to `path` as a JSON snapshot.
    pub fn save(&self, path: &str) -> io::Result<()> {
        self.network.save_json(path)
    }

    /// Replaces the owned network with a snapshot previously written by
    /// [`ParitySession::save`].
    ///
    /// A snapshot whose topology disagrees with the session's configuration
    /// is rejected with `InvalidData`; weights are never loaded into the
    /// wrong shape.
    pub fn load(&mut self, path: &str) -> io::Result<()> {
        let loaded = Network::load_json(path)?;
        if loaded.topology() != self.network.topology() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "snapshot topology {:?} does not match configured topology {:?}",
                    loaded.topology(),
                    self.network.topology()
                ),
            ));
        }
        log::info!("loaded network snapshot from {path}");
        self.network = loaded;
        Ok(())
    }
}
