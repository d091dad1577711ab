//! Decision
//!
//! Turns a statistic and its degrees of freedom into a p-value with the
//! chi-squared upper tail, and a p-value into a reject/accept decision.
use crate::errors::GTestError;
use crate::validation::check_alpha;
use log::debug;
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Statistic, degrees of freedom and p-value of a single test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub statistic: f64,
    pub degrees_of_freedom: usize,
    pub p_value: f64,
}

impl TestResult {
    /// Attach the chi-squared p-value to a statistic.
    pub fn new(statistic: f64, degrees_of_freedom: usize) -> Result<Self, GTestError> {
        let p_value = upper_tail_probability(statistic, degrees_of_freedom)?;
        Ok(TestResult {
            statistic,
            degrees_of_freedom,
            p_value,
        })
    }

    /// Whether the null hypothesis is rejected at significance level `alpha`.
    pub fn reject(&self, alpha: f64) -> Result<bool, GTestError> {
        decide_p_value(self.p_value, alpha)
    }
}

/// Probability of a chi-squared variable with `df` degrees of freedom
/// exceeding `statistic`.
pub fn upper_tail_probability(statistic: f64, df: usize) -> Result<f64, GTestError> {
    if df == 0 {
        return Err(GTestError::TooFewCategories { required: 1, found: 0 });
    }
    let dist = ChiSquared::new(df as f64).map_err(|e| GTestError::Distribution(e.to_string()))?;
    Ok(dist.sf(statistic.max(0.0)))
}

/// Reject the null hypothesis when `p_value < alpha`.
pub fn decide_p_value(p_value: f64, alpha: f64) -> Result<bool, GTestError> {
    check_alpha(alpha)?;
    Ok(p_value < alpha)
}

/// Reject the null hypothesis when the upper tail of `statistic` is below `alpha`.
pub fn decide(statistic: f64, df: usize, alpha: f64) -> Result<bool, GTestError> {
    check_alpha(alpha)?;
    let p_value = upper_tail_probability(statistic, df)?;
    debug!(
        "G = {:.6}, df = {}, p = {:.6e}, alpha = {}, reject = {}",
        statistic,
        df,
        p_value,
        alpha,
        p_value < alpha
    );
    Ok(p_value < alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_tail_known_values() {
        // Median of chi-squared(2) is 2 ln 2.
        let p = upper_tail_probability(2.0 * 2.0_f64.ln(), 2).unwrap();
        assert!((p - 0.5).abs() < 1e-12);
        // 3.841459 is the 95% quantile of chi-squared(1).
        let p = upper_tail_probability(3.841_458_820_694_124, 1).unwrap();
        assert!((p - 0.05).abs() < 1e-9);
        assert!((upper_tail_probability(0.0, 3).unwrap() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_upper_tail_zero_df() {
        assert!(matches!(
            upper_tail_probability(1.0, 0),
            Err(GTestError::TooFewCategories { .. })
        ));
    }

    #[test]
    fn test_decide_monotonic_boundary() {
        let statistic = 5.0;
        let df = 2;
        let p = upper_tail_probability(statistic, df).unwrap();
        for alpha in [p + 1e-6, p + 0.01, 0.5, 0.99] {
            assert!(decide(statistic, df, alpha).unwrap());
        }
        for alpha in [p - 1e-6, p / 2.0, 1e-6] {
            assert!(!decide(statistic, df, alpha).unwrap());
        }
    }

    #[test]
    fn test_decide_rejects_bad_alpha() {
        for alpha in [0.0, 1.0, -0.5, 2.0] {
            assert_eq!(
                decide(1.0, 1, alpha),
                Err(GTestError::OutOfRangeSignificance(alpha))
            );
            assert!(decide_p_value(0.5, alpha).is_err());
        }
    }

    #[test]
    fn test_result_matches_decide() {
        let result = TestResult::new(5.0, 2).unwrap();
        assert_eq!(result.degrees_of_freedom, 2);
        assert_eq!(result.p_value, upper_tail_probability(5.0, 2).unwrap());
        assert_eq!(result.reject(0.1).unwrap(), decide(5.0, 2, 0.1).unwrap());
        assert_eq!(result.reject(0.05).unwrap(), decide(5.0, 2, 0.05).unwrap());
    }

    #[test]
    fn test_decide_p_value() {
        assert!(decide_p_value(0.01, 0.05).unwrap());
        assert!(!decide_p_value(0.05, 0.05).unwrap());
    }
}
