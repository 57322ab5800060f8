pub mod parity;

pub use parity::{parity_truth_table, TrainingExample};
