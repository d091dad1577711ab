//! Goodness of fit
//!
//! G-test of observed counts against an expected distribution. Expected
//! values may be given as proportions or as counts on any scale.
use crate::constants::{MIN_CATEGORIES, MIN_INTRINSIC_CATEGORIES, RESCALE_TOLERANCE};
use crate::decision::{decide, upper_tail_probability, TestResult};
use crate::errors::GTestError;
use crate::statistic::g_term_ln;
use crate::utils::{count_sum, items_to_strings};
use crate::validation::{check_alpha, check_counts, check_expected, check_min_categories, check_same_length};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the expected distribution was obtained, which fixes the degrees of freedom.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hypothesis {
    /// Expected distribution fully specified in advance: `k - 1` degrees of freedom.
    #[default]
    Simple,
    /// One parameter of the expected distribution was estimated from the
    /// observed counts (e.g. allele frequencies): `k - 2` degrees of freedom.
    Intrinsic,
}

impl FromStr for Hypothesis {
    type Err = GTestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Simple" => Ok(Hypothesis::Simple),
            "Intrinsic" => Ok(Hypothesis::Intrinsic),
            _ => Err(GTestError::ParseString(
                s.to_string(),
                "Hypothesis".to_string(),
                items_to_strings(vec!["Simple", "Intrinsic"]),
            )),
        }
    }
}

/// Degrees of freedom for `k` categories under the given hypothesis.
pub fn degrees_of_freedom(k: usize, hypothesis: Hypothesis) -> Result<usize, GTestError> {
    match hypothesis {
        Hypothesis::Simple => {
            check_min_categories(k, MIN_CATEGORIES)?;
            Ok(k - 1)
        }
        Hypothesis::Intrinsic => {
            check_min_categories(k, MIN_INTRINSIC_CATEGORIES)?;
            Ok(k - 2)
        }
    }
}

fn validate(expected: &[f64], observed: &[i64]) -> Result<(), GTestError> {
    check_min_categories(expected.len(), MIN_CATEGORIES)?;
    check_same_length(expected, observed)?;
    check_expected(expected)?;
    check_counts(observed)
}

/// G statistic comparing `observed` counts with the `expected` distribution.
///
/// When the expected values do not sum to the observed total they are
/// rescaled to it first, so proportions can be passed directly. The scale
/// factor is applied in log space, so expected values close to the limits
/// of `f64` never overflow or underflow along the way.
pub fn statistic(expected: &[f64], observed: &[i64]) -> Result<f64, GTestError> {
    validate(expected, observed)?;
    let max = expected.iter().copied().fold(f64::MIN_POSITIVE, f64::max);
    // sum of expected / max, in [1, k]
    let unit_sum: f64 = expected.iter().map(|e| e / max).sum();
    let sum_observed = count_sum(observed);
    let ln_ratio = if (max * unit_sum - sum_observed).abs() > RESCALE_TOLERANCE {
        sum_observed.ln() - max.ln() - unit_sum.ln()
    } else {
        0.0
    };
    let sum: f64 = observed
        .iter()
        .zip(expected)
        .map(|(&o, &e)| g_term_ln(o, e.ln() + ln_ratio))
        .sum();
    Ok(2.0 * sum)
}

/// Statistic, degrees of freedom and p-value under the chosen hypothesis.
pub fn evaluate(expected: &[f64], observed: &[i64], hypothesis: Hypothesis) -> Result<TestResult, GTestError> {
    let g = statistic(expected, observed)?;
    TestResult::new(g, degrees_of_freedom(observed.len(), hypothesis)?)
}

/// p-value of the simple-hypothesis test, `k - 1` degrees of freedom.
pub fn p_value(expected: &[f64], observed: &[i64]) -> Result<f64, GTestError> {
    let g = statistic(expected, observed)?;
    upper_tail_probability(g, degrees_of_freedom(observed.len(), Hypothesis::Simple)?)
}

/// p-value of the intrinsic-hypothesis test, `k - 2` degrees of freedom.
pub fn p_value_intrinsic(expected: &[f64], observed: &[i64]) -> Result<f64, GTestError> {
    let g = statistic(expected, observed)?;
    upper_tail_probability(g, degrees_of_freedom(observed.len(), Hypothesis::Intrinsic)?)
}

/// Whether `observed` departs from `expected` at significance level `alpha`.
pub fn test(expected: &[f64], observed: &[i64], alpha: f64) -> Result<bool, GTestError> {
    check_alpha(alpha)?;
    let g = statistic(expected, observed)?;
    decide(g, degrees_of_freedom(observed.len(), Hypothesis::Simple)?, alpha)
}

/// As [`test`], with the intrinsic-hypothesis degrees of freedom.
pub fn test_intrinsic(expected: &[f64], observed: &[i64], alpha: f64) -> Result<bool, GTestError> {
    check_alpha(alpha)?;
    let g = statistic(expected, observed)?;
    decide(g, degrees_of_freedom(observed.len(), Hypothesis::Intrinsic)?, alpha)
}
