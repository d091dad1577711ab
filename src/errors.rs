//! Errors
//!
//! Custom error types used throughout the `gtest` crate.
use std::fmt;
use thiserror::Error;

/// A row or column of a contingency table, identified by its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marginal {
    Row(usize),
    Column(usize),
}

impl fmt::Display for Marginal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marginal::Row(i) => write!(f, "row {}", i),
            Marginal::Column(j) => write!(f, "column {}", j),
        }
    }
}

/// Errors that can occur while computing a G-test.
#[derive(Debug, Error, PartialEq)]
pub enum GTestError {
    /// Paired sequences differ in length, or a table row is ragged.
    #[error("Dimension mismatch, expected length {expected} but found {found}.")]
    LengthMismatch { expected: usize, found: usize },
    /// Fewer categories, rows or columns than the test needs.
    #[error("Insufficient dimension, at least {required} required but {found} provided.")]
    TooFewCategories { required: usize, found: usize },
    /// An observed count is negative.
    #[error("Observed count {value} at position {index} is negative.")]
    NegativeCount { index: usize, value: i64 },
    /// An expected value is zero, negative or not finite.
    #[error("Expected value {value} at position {index} is not strictly positive.")]
    NonPositiveExpected { index: usize, value: f64 },
    /// A row or column of a contingency table sums to zero.
    #[error("The counts of {0} sum to zero.")]
    DegenerateMarginal(Marginal),
    /// Significance level outside of the open interval (0, 1).
    #[error("Significance level {0} is out of range, expected a value strictly between 0 and 1.")]
    OutOfRangeSignificance(f64),
    /// The chi-squared distribution could not be constructed.
    #[error("Unable to build chi-squared distribution: {0}")]
    Distribution(String),
    /// Invalid value parsing.
    #[error("Invalid value {0} passed for {1}, expected one of {2}.")]
    ParseString(String, String, String),
    /// Unable to write configuration.
    #[error("Unable to write configuration: {0}")]
    UnableToWrite(String),
    /// Unable to read configuration.
    #[error("Unable to read configuration: {0}")]
    UnableToRead(String),
}
