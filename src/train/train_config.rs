use std::sync::mpsc;

use crate::train::epoch_stats::EpochStats;

/// Configuration for a [`train_until_converged`](crate::train_until_converged) run.
///
/// # Fields
/// - `epochs`          — upper bound on full passes over the training data
/// - `error_threshold` — stop early once the full-set MSE drops below this
/// - `check_interval`  — epochs between error checks; the threshold is only
///                       consulted at these points
/// - `shuffle`         — randomize example order each epoch; order does not
///                       affect correctness, only convergence behavior
/// - `progress_tx`     — optional channel sender; one `EpochStats` is sent
///                       per error check. If the receiver is dropped the
///                       loop terminates early (clean shutdown).
pub struct TrainConfig {
    pub epochs: usize,
    pub error_threshold: f64,
    pub check_interval: usize,
    pub shuffle: bool,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
}

impl TrainConfig {
    /// Creates a config with the default 1000-epoch check cadence, fixed
    /// example order, and no progress channel.
    pub fn new(epochs: usize, error_threshold: f64) -> Self {
        TrainConfig {
            epochs,
            error_threshold,
            check_interval: 1000,
            shuffle: false,
            progress_tx: None,
        }
    }
}
