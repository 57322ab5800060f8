use std::fmt;

/// Errors raised by the network engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vector's length disagrees with the width a layer or neuron expects.
    /// Detected before any weight is touched, so a failed call never leaves
    /// the network partially updated.
    DimensionMismatch { expected: usize, actual: usize },
    /// Rejected at construction: zero-sized layers or a non-positive
    /// learning rate.
    InvalidConfiguration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected} values, got {actual}")
            }
            Error::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}
