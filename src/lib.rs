pub mod activation;
pub mod dataset;
pub mod error;
pub mod network;
pub mod session;
pub mod train;

// Convenience re-exports
pub use dataset::parity::{parity_truth_table, TrainingExample};
pub use error::Error;
pub use network::config::NetworkConfig;
pub use network::network::{ForwardTrace, Network};
pub use network::snapshot::{LayerParameters, NetworkParameters, NeuronParameters};
pub use session::{Evaluation, ParitySession};
pub use train::epoch_stats::EpochStats;
pub use train::train_config::TrainConfig;
pub use train::trainer::{train_until_converged, TrainReport};
