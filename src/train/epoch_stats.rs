use serde::{Deserialize, Serialize};

/// Progress record emitted by the training loop.
///
/// When a progress channel is configured in
/// [`TrainConfig`](crate::TrainConfig), one `EpochStats` is sent per error
/// check. Receivers use it to drive progress output without touching the
/// network mid-run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean squared error over the full training set at this epoch.
    pub error: f64,
}
