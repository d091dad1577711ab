//! Statistic
//!
//! The log-likelihood ratio kernel shared by all tests:
//! `G = 2 * sum(o * ln(o / e))`.

/// Contribution of a single cell, `o * ln(o / e)`.
///
/// An empty cell contributes nothing, following the limit `x ln x -> 0`.
#[inline]
pub fn g_term(observed: i64, expected: f64) -> f64 {
    if observed == 0 {
        0.0
    } else {
        let o = observed as f64;
        o * (o / expected).ln()
    }
}

/// As [`g_term`], with the expected value given by its natural logarithm.
///
/// Lets callers fold a rescaling factor into `ln_expected` when the scaled
/// expected value itself would not be representable.
#[inline]
pub fn g_term_ln(observed: i64, ln_expected: f64) -> f64 {
    if observed == 0 {
        0.0
    } else {
        let o = observed as f64;
        o * (o.ln() - ln_expected)
    }
}

/// G statistic of paired observed counts and expected values.
///
/// Expected values are used exactly as given; callers are responsible for
/// validation and for matching the observed total.
pub fn g_statistic(observed: &[i64], expected: &[f64]) -> f64 {
    let sum: f64 = observed.iter().zip(expected).map(|(&o, &e)| g_term(o, e)).sum();
    2.0 * sum
}
