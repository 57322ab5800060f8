use rand::seq::SliceRandom;

use crate::dataset::parity::TrainingExample;
use crate::error::Error;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;

/// Outcome of a [`train_until_converged`] run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    /// Epochs actually executed, at most the configured limit.
    pub epochs_run: usize,
    /// Full-set mean squared error when the run ended.
    pub final_error: f64,
    /// True when the error dropped below the threshold before the epoch
    /// limit ran out.
    pub converged: bool,
}

/// Trains `network` on `examples` until the error threshold is reached or
/// the epoch limit runs out, whichever comes first.
///
/// Each epoch runs one [`Network::train`] call per example. Every
/// `config.check_interval` epochs the full-set MSE is computed; once it
/// falls below `config.error_threshold` the loop stops and reports the
/// epoch it stopped at. There is no cancellation beyond the epoch limit;
/// a caller wanting bounded wall-clock time caps `epochs`.
///
/// # Panics
/// Panics if `examples` is empty or `config.check_interval` is zero.
pub fn train_until_converged(
    network: &mut Network,
    examples: &[TrainingExample],
    config: &TrainConfig,
) -> Result<TrainReport, Error> {
    assert!(!examples.is_empty(), "examples must not be empty");
    assert!(config.check_interval > 0, "check_interval must be at least 1");

    let mut order: Vec<usize> = (0..examples.len()).collect();

    for epoch in 1..=config.epochs {
        if config.shuffle {
            order.shuffle(&mut rand::thread_rng());
        }

        for &idx in &order {
            let example = &examples[idx];
            network.train(&example.inputs, &example.expected)?;
        }

        if epoch % config.check_interval == 0 {
            let error = network.mean_squared_error(examples)?;
            log::debug!("epoch {epoch}/{}: mse = {error:.6}", config.epochs);

            let converged = error < config.error_threshold;
            let receiver_gone = match config.progress_tx {
                Some(ref tx) => tx
                    .send(EpochStats {
                        epoch,
                        total_epochs: config.epochs,
                        error,
                    })
                    .is_err(),
                None => false,
            };

            if converged || receiver_gone {
                return Ok(TrainReport {
                    epochs_run: epoch,
                    final_error: error,
                    converged,
                });
            }
        }
    }

    let final_error = network.mean_squared_error(examples)?;
    Ok(TrainReport {
        epochs_run: config.epochs,
        final_error,
        converged: final_error < config.error_threshold,
    })
}
