use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::sigmoid;
use crate::error::Error;

/// Half-width of the uniform interval weights and biases are drawn from at
/// construction. The exact range is a tuning knob, not load-bearing.
pub const WEIGHT_INIT_LIMIT: f64 = 0.5;

/// One unit of a layer: a weight per input plus a bias.
///
/// A neuron carries no per-call state; forward activations live in the
/// [`ForwardTrace`](crate::ForwardTrace) the network hands back, so the same
/// neuron can serve overlapping forward passes through shared references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl Neuron {
    /// Creates a neuron with `input_count` weights, each drawn (with the
    /// bias) uniformly from `[-WEIGHT_INIT_LIMIT, WEIGHT_INIT_LIMIT)`.
    pub fn new<R: Rng + ?Sized>(input_count: usize, rng: &mut R) -> Neuron {
        let dist = Uniform::new(-WEIGHT_INIT_LIMIT, WEIGHT_INIT_LIMIT);
        let weights = (0..input_count).map(|_| dist.sample(rng)).collect();
        Neuron {
            weights,
            bias: dist.sample(rng),
        }
    }

    pub fn input_count(&self) -> usize {
        self.weights.len()
    }

    /// Sigmoid of the bias plus the input/weight dot product.
    pub fn compute_output(&self, inputs: &[f64]) -> Result<f64, Error> {
        if inputs.len() != self.weights.len() {
            return Err(Error::DimensionMismatch {
                expected: self.weights.len(),
                actual: inputs.len(),
            });
        }
        let mut sum = self.bias;
        for (input, weight) in inputs.iter().zip(self.weights.iter()) {
            sum += input * weight;
        }
        Ok(sigmoid(sum))
    }
}
