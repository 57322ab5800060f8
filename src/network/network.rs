use serde::{Deserialize, Serialize};

use crate::activation::sigmoid_derivative;
use crate::dataset::parity::TrainingExample;
use crate::error::Error;
use crate::network::config::NetworkConfig;
use crate::network::layer::Layer;
use crate::network::snapshot::{LayerParameters, NetworkParameters, NeuronParameters};

/// Every layer's activations from one forward pass, input side first.
///
/// Backpropagation takes the trace as an explicit argument instead of reading
/// activations back out of the neurons, so a trace belongs to exactly one
/// (input, forward) pair and concurrent forward passes cannot alias.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardTrace {
    activations: Vec<Vec<f64>>,
}

impl ForwardTrace {
    /// Activations of layer `index` (0 = first hidden layer).
    pub fn layer(&self, index: usize) -> &[f64] {
        &self.activations[index]
    }

    /// The final layer's activations, i.e. the network output.
    pub fn output(&self) -> &[f64] {
        self.activations.last().map_or(&[], Vec::as_slice)
    }
}

/// A fully-connected feed-forward network: a hidden layer and an output
/// layer, trained by per-example backpropagation with a fixed learning rate.
///
/// Topology is fixed at construction; only weights and biases change, and
/// only through [`Network::train`] or a persistence load. The network holds
/// no per-call state and no internal locking; an owner sharing one instance
/// across threads must serialize access itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Network {
    layers: Vec<Layer>,
    learning_rate: f64,
}

impl Network {
    /// Builds a `(input_size, hidden_neurons, output_neurons)` network with
    /// weights drawn from the thread-local generator.
    pub fn new(config: &NetworkConfig) -> Result<Network, Error> {
        Network::with_rng(config, &mut rand::thread_rng())
    }

    /// Like [`Network::new`] but with an explicit generator, so callers can
    /// seed a `StdRng` for reproducible initialization.
    pub fn with_rng<R: rand::Rng + ?Sized>(
        config: &NetworkConfig,
        rng: &mut R,
    ) -> Result<Network, Error> {
        config.validate()?;
        let layers = vec![
            Layer::new(config.hidden_neurons, config.input_size, rng),
            Layer::new(config.output_neurons, config.hidden_neurons, rng),
        ];
        Ok(Network {
            layers,
            learning_rate: config.learning_rate,
        })
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Width of the input vector the network expects.
    pub fn input_size(&self) -> usize {
        self.layers.first().map_or(0, Layer::input_count)
    }

    /// Width of the vector the network produces.
    pub fn output_size(&self) -> usize {
        self.layers.last().map_or(0, Layer::len)
    }

    /// Per-layer `(input_width, neuron_count)` pairs, input side first.
    /// Persistence guards compare these to reject incompatible snapshots.
    pub fn topology(&self) -> Vec<(usize, usize)> {
        self.layers
            .iter()
            .map(|layer| (layer.input_count(), layer.len()))
            .collect()
    }

    /// Runs the input through every layer and returns the final output
    /// vector, each element in (0, 1).
    pub fn forward(&self, inputs: &[f64]) -> Result<Vec<f64>, Error> {
        check_width(self.input_size(), inputs.len())?;
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    /// Forward pass that keeps every layer's activations for backpropagation.
    pub fn forward_trace(&self, inputs: &[f64]) -> Result<ForwardTrace, Error> {
        check_width(self.input_size(), inputs.len())?;
        let mut activations = Vec::with_capacity(self.layers.len());
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            current = layer.forward(&current)?;
            activations.push(current.clone());
        }
        Ok(ForwardTrace { activations })
    }

    /// One online training step: forward pass, backpropagated deltas, then a
    /// weight/bias update against this single example.
    ///
    /// Both vector widths are checked before any weight is touched, so a
    /// mismatch never leaves the network partially updated.
    pub fn train(&mut self, inputs: &[f64], expected: &[f64]) -> Result<(), Error> {
        check_width(self.input_size(), inputs.len())?;
        check_width(self.output_size(), expected.len())?;

        let trace = self.forward_trace(inputs)?;
        let deltas = self.compute_deltas(&trace, expected);
        self.apply_updates(inputs, &trace, &deltas);
        Ok(())
    }

    /// Mean sum-of-squared-error over a full example set. Reporting only;
    /// the gradient never reads this. Empty sets score 0.0.
    pub fn mean_squared_error(&self, examples: &[TrainingExample]) -> Result<f64, Error> {
        if examples.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for example in examples {
            check_width(self.output_size(), example.expected.len())?;
            let outputs = self.forward(&example.inputs)?;
            total += outputs
                .iter()
                .zip(example.expected.iter())
                .map(|(actual, target)| (target - actual).powi(2))
                .sum::<f64>();
        }
        Ok(total / examples.len() as f64)
    }

    /// Detached snapshot of every weight and bias, layer by layer. Two calls
    /// with no intervening [`Network::train`] return identical values.
    pub fn parameters(&self) -> NetworkParameters {
        NetworkParameters {
            layers: self
                .layers
                .iter()
                .map(|layer| LayerParameters {
                    neurons: layer
                        .neurons
                        .iter()
                        .map(|neuron| NeuronParameters {
                            weights: neuron.weights.clone(),
                            bias: neuron.bias,
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Serializes the network to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by
    /// [`Network::save_json`]. Callers owning a fixed topology should compare
    /// [`Network::topology`] before adopting the result.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Error signals for every neuron, computed output layer first, then
    /// hidden layers strictly back to front: a layer's deltas depend on the
    /// next layer's already-computed deltas.
    fn compute_deltas(&self, trace: &ForwardTrace, expected: &[f64]) -> Vec<Vec<f64>> {
        let mut deltas = vec![Vec::new(); self.layers.len()];
        let Some(last) = self.layers.len().checked_sub(1) else {
            return deltas;
        };

        deltas[last] = trace
            .layer(last)
            .iter()
            .zip(expected.iter())
            .map(|(output, target)| (target - output) * sigmoid_derivative(*output))
            .collect();

        for i in (0..last).rev() {
            let next_layer = &self.layers[i + 1];
            let next_deltas = &deltas[i + 1];
            deltas[i] = (0..self.layers[i].len())
                .map(|j| {
                    let error: f64 = next_layer
                        .neurons
                        .iter()
                        .zip(next_deltas.iter())
                        .map(|(next, delta)| next.weights[j] * delta)
                        .sum();
                    error * sigmoid_derivative(trace.layer(i)[j])
                })
                .collect();
        }

        deltas
    }

    /// Applies `w += lr * delta * input` and `bias += lr * delta` per neuron.
    /// Layer 0 reads the external inputs; every later layer reads the
    /// previous layer's activations captured during the forward pass.
    fn apply_updates(&mut self, inputs: &[f64], trace: &ForwardTrace, deltas: &[Vec<f64>]) {
        let learning_rate = self.learning_rate;
        for i in 0..self.layers.len() {
            let layer_inputs = if i == 0 { inputs } else { trace.layer(i - 1) };
            for (neuron, delta) in self.layers[i].neurons.iter_mut().zip(deltas[i].iter()) {
                for (weight, input) in neuron.weights.iter_mut().zip(layer_inputs.iter()) {
                    *weight += learning_rate * delta * input;
                }
                neuron.bias += learning_rate * delta;
            }
        }
    }
}

fn check_width(expected: usize, actual: usize) -> Result<(), Error> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::DimensionMismatch { expected, actual })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config() -> NetworkConfig {
        NetworkConfig::new(3, 4, 2, 0.1)
    }

    #[test]
    fn topology_follows_the_config() {
        let network = Network::with_rng(&config(), &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(network.topology(), vec![(3, 4), (4, 2)]);
        assert_eq!(network.input_size(), 3);
        assert_eq!(network.output_size(), 2);
    }

    #[test]
    fn seeded_construction_is_reproducible() {
        let a = Network::with_rng(&config(), &mut StdRng::seed_from_u64(99)).unwrap();
        let b = Network::with_rng(&config(), &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(a.parameters(), b.parameters());
    }

    #[test]
    fn invalid_configuration_fails_at_construction() {
        let bad = NetworkConfig::new(3, 0, 1, 0.1);
        assert!(matches!(
            Network::new(&bad),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn trace_output_matches_plain_forward() {
        let network = Network::with_rng(&config(), &mut StdRng::seed_from_u64(5)).unwrap();
        let inputs = [1.0, 0.0, 1.0];
        let trace = network.forward_trace(&inputs).unwrap();
        assert_eq!(trace.output(), network.forward(&inputs).unwrap().as_slice());
        assert_eq!(trace.layer(0).len(), 4);
    }

    #[test]
    fn error_of_empty_set_is_zero() {
        let network = Network::with_rng(&config(), &mut StdRng::seed_from_u64(6)).unwrap();
        assert_eq!(network.mean_squared_error(&[]).unwrap(), 0.0);
    }
}
