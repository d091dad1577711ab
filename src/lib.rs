//! G-test
//!
//! Log-likelihood ratio tests for categorical count data: goodness of fit,
//! independence of a contingency table, comparison of two samples, and the
//! signed root log-likelihood ratio of a 2×2 co-occurrence table.

// Modules
pub mod association;
pub mod batch;
pub mod comparison;
pub mod config;
pub mod constants;
pub mod contingency;
pub mod decision;
pub mod errors;
pub mod goodness_of_fit;
pub mod root_llr;
pub mod statistic;
pub mod utils;
pub mod validation;

// Individual classes, and functions
pub use config::{ConfigIO, GTestConfig};
pub use decision::TestResult;
pub use errors::GTestError;
pub use goodness_of_fit::Hypothesis;
pub use root_llr::root_log_likelihood_ratio;
