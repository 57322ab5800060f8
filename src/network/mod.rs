pub mod config;
pub mod layer;
pub mod network;
pub mod neuron;
pub mod snapshot;

pub use config::NetworkConfig;
pub use layer::Layer;
pub use network::{ForwardTrace, Network};
pub use neuron::Neuron;
pub use snapshot::{LayerParameters, NetworkParameters, NeuronParameters};
