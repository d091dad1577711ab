//! Comparison
//!
//! Tests whether two samples over the same categories come from the same
//! distribution, by treating them as the two rows of a contingency table.
use crate::contingency;
use crate::decision::TestResult;
use crate::errors::GTestError;
use crate::validation::check_same_length;

fn as_table(observed1: &[i64], observed2: &[i64]) -> Result<Vec<Vec<i64>>, GTestError> {
    check_same_length(observed1, observed2)?;
    Ok(vec![observed1.to_vec(), observed2.to_vec()])
}

/// G statistic comparing the two samples.
pub fn statistic(observed1: &[i64], observed2: &[i64]) -> Result<f64, GTestError> {
    contingency::statistic(&as_table(observed1, observed2)?)
}

/// Statistic, degrees of freedom (`n - 1`) and p-value.
pub fn evaluate(observed1: &[i64], observed2: &[i64]) -> Result<TestResult, GTestError> {
    contingency::evaluate(&as_table(observed1, observed2)?)
}

/// p-value of the comparison.
pub fn p_value(observed1: &[i64], observed2: &[i64]) -> Result<f64, GTestError> {
    contingency::p_value(&as_table(observed1, observed2)?)
}

/// Whether the two samples differ at significance level `alpha`.
pub fn test(observed1: &[i64], observed2: &[i64], alpha: f64) -> Result<bool, GTestError> {
    contingency::test(&as_table(observed1, observed2)?, alpha)
}
