use serde::{Deserialize, Serialize};

/// One row of a training set: an input vector paired with the outputs the
/// network should learn to produce for it. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub inputs: Vec<f64>,
    pub expected: Vec<f64>,
}

impl TrainingExample {
    pub fn new(inputs: Vec<f64>, expected: Vec<f64>) -> TrainingExample {
        TrainingExample { inputs, expected }
    }
}

/// Full truth table of the N-bit parity function: `2^N` rows where input `i`
/// of row `k` is bit `i` of `k`, labeled 1.0 iff `k` has an odd number of
/// set bits.
///
/// # Panics
/// Panics if `input_count` is not below the pointer width; the table would
/// not fit in memory long before that anyway.
pub fn parity_truth_table(input_count: usize) -> Vec<TrainingExample> {
    assert!(
        input_count < usize::BITS as usize,
        "input_count must be below {}",
        usize::BITS
    );
    let combinations = 1usize << input_count;
    (0..combinations)
        .map(|k| {
            let inputs = (0..input_count)
                .map(|bit| if k >> bit & 1 == 1 { 1.0 } else { 0.0 })
                .collect();
            let label = if k.count_ones() % 2 == 1 { 1.0 } else { 0.0 };
            TrainingExample::new(inputs, vec![label])
        })
        .collect()
}
