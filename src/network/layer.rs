use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::network::neuron::Neuron;

/// An ordered collection of neurons sharing one input width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(neuron_count: usize, input_count: usize, rng: &mut R) -> Layer {
        let neurons = (0..neuron_count)
            .map(|_| Neuron::new(input_count, rng))
            .collect();
        Layer { neurons }
    }

    pub fn len(&self) -> usize {
        self.neurons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neurons.is_empty()
    }

    /// Input width shared by every neuron in the layer.
    pub fn input_count(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::input_count)
    }

    /// Feeds the same input vector to every neuron; returns their outputs in
    /// neuron order. An empty layer yields an empty vector.
    pub fn forward(&self, inputs: &[f64]) -> Result<Vec<f64>, Error> {
        self.neurons
            .iter()
            .map(|neuron| neuron.compute_output(inputs))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn forward_preserves_neuron_order() {
        let layer = Layer {
            neurons: vec![
                Neuron {
                    weights: vec![10.0],
                    bias: 0.0,
                },
                Neuron {
                    weights: vec![-10.0],
                    bias: 0.0,
                },
            ],
        };
        let outputs = layer.forward(&[1.0]).unwrap();
        assert_eq!(outputs.len(), 2);
        assert!(outputs[0] > 0.99);
        assert!(outputs[1] < 0.01);
    }

    #[test]
    fn neurons_share_the_input_width() {
        let mut rng = StdRng::seed_from_u64(3);
        let layer = Layer::new(5, 7, &mut rng);
        assert_eq!(layer.len(), 5);
        assert!(layer.neurons.iter().all(|n| n.input_count() == 7));
        assert_eq!(layer.input_count(), 7);
    }

    #[test]
    fn mismatched_input_is_rejected() {
        let mut rng = StdRng::seed_from_u64(4);
        let layer = Layer::new(2, 3, &mut rng);
        assert!(layer.forward(&[0.0, 1.0]).is_err());
    }
}
