use serde::{Deserialize, Serialize};

/// Weights and bias of one neuron, detached from the live network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeuronParameters {
    pub weights: Vec<f64>,
    pub bias: f64,
}

/// Parameters of one layer, in neuron order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerParameters {
    pub neurons: Vec<NeuronParameters>,
}

/// Read-only snapshot of every parameter in a network, input side first.
///
/// Produced by [`Network::parameters`](crate::Network::parameters); hosting
/// layers serialize it directly when exposing the network's internals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkParameters {
    pub layers: Vec<LayerParameters>,
}
