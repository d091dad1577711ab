//! Root log-likelihood ratio
//!
//! Signed association score for a 2×2 co-occurrence table
//!
//! ```text
//! [[k11, k12],
//!  [k21, k22]]
//! ```
//!
//! where `k11` counts events A and B together, `k12` A without B, `k21` B
//! without A and `k22` neither. Sparse tables are accepted: rows or columns
//! summing to zero simply contribute nothing to the statistic.
use crate::contingency::unchecked_statistic;
use crate::errors::GTestError;
use crate::validation::check_counts;

/// Unsigned log-likelihood ratio (G statistic) of the 2×2 table.
pub fn log_likelihood_ratio(k11: i64, k12: i64, k21: i64, k22: i64) -> Result<f64, GTestError> {
    check_counts(&[k11, k12, k21, k22])?;
    Ok(unchecked_statistic(&[vec![k11, k12], vec![k21, k22]]))
}

/// Square root of the log-likelihood ratio, positive when the rate
/// `k11 / (k11 + k12)` exceeds `k21 / (k21 + k22)` and negative otherwise.
pub fn root_log_likelihood_ratio(k11: i64, k12: i64, k21: i64, k22: i64) -> Result<f64, GTestError> {
    let llr = log_likelihood_ratio(k11, k12, k21, k22)?;
    if llr <= 0.0 {
        return Ok(0.0);
    }
    let root = llr.sqrt();
    let rate1 = k11 as f64 / (k11 as f64 + k12 as f64);
    let rate2 = k21 as f64 / (k21 as f64 + k22 as f64);
    if rate1 > rate2 {
        Ok(root)
    } else {
        Ok(-root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contingency;
    use crate::utils::precision_round;

    fn rllr(k11: i64, k12: i64, k21: i64, k22: i64) -> f64 {
        root_log_likelihood_ratio(k11, k12, k21, k22).unwrap()
    }

    #[test]
    fn test_sign() {
        // k11 above what independence predicts
        assert!(rllr(904, 21060, 1144, 283012) > 0.0);
        // k11 below what independence predicts
        assert!(rllr(36, 21928, 60280, 623876) < 0.0);
    }

    #[test]
    fn test_single_diagonal() {
        assert!((rllr(1, 0, 0, 1) - 2.772589_f64.sqrt()).abs() < 1e-6);
        assert!((rllr(0, 1, 1, 0) + 2.772589_f64.sqrt()).abs() < 1e-6);
        assert!((rllr(10, 0, 0, 10) - 27.72589_f64.sqrt()).abs() < 1e-5);
        assert_eq!(precision_round(rllr(1, 0, 0, 1).powi(2), 6), 2.772589);
        // 2 n ln 2 with n = 10
        let llr = log_likelihood_ratio(5, 0, 0, 5).unwrap();
        assert!((llr - 20.0 * 2.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_cell() {
        assert!((rllr(5, 1995, 0, 100000) - 39.33052_f64.sqrt()).abs() < 1e-5);
        assert!((rllr(0, 100000, 5, 1995) + 39.33052_f64.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_large_counts() {
        assert!((rllr(1000, 1995, 1000, 100000) - 4730.737_f64.sqrt()).abs() < 1e-3);
        assert!((rllr(1000, 100000, 1000, 1995) + 4730.737_f64.sqrt()).abs() < 1e-3);
        assert!((rllr(1000, 1000, 1000, 100000) - 5734.343_f64.sqrt()).abs() < 1e-3);
        assert!((rllr(1000, 1000, 1000, 99000) - 5714.932_f64.sqrt()).abs() < 1e-3);
    }

    #[test]
    fn test_magnitude_matches_contingency() {
        let table = vec![vec![12, 30], vec![7, 80]];
        let g = contingency::statistic(&table).unwrap();
        assert!((rllr(12, 30, 7, 80) - g.sqrt()).abs() < 1e-12);
        assert!((rllr(7, 80, 12, 30) + g.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sparse_patterns() {
        // A single non-zero cell carries no association.
        assert_eq!(rllr(5, 0, 0, 0), 0.0);
        assert_eq!(rllr(0, 0, 0, 5), 0.0);
        // An empty row leaves one row, which is independent of the columns.
        assert_eq!(rllr(0, 0, 3, 7), 0.0);
        assert_eq!(rllr(3, 7, 0, 0), 0.0);
        // An empty column likewise.
        assert_eq!(rllr(4, 0, 9, 0), 0.0);
        assert_eq!(rllr(0, 0, 0, 0), 0.0);
        // Two zeros off one diagonal.
        let r = rllr(3, 0, 2, 6);
        assert!(r.is_finite() && r > 0.0);
        let r = rllr(0, 4, 3, 0);
        assert!(r.is_finite() && r < 0.0);
    }

    #[test]
    fn test_equal_rates_are_zero() {
        assert_eq!(rllr(10, 20, 20, 40), 0.0);
    }

    #[test]
    fn test_row_sums_beyond_i64() {
        let half = i64::MAX / 2 + 1;
        let r = rllr(half, half, 1, 1);
        assert!(r.is_finite());
        assert!(r.abs() < 1e-6);
        let r = rllr(i64::MAX, 1, 1, 1);
        assert!(r.is_finite() && r > 0.0);
    }

    #[test]
    fn test_negative_counts() {
        assert_eq!(
            root_log_likelihood_ratio(1, -1, 0, 1),
            Err(GTestError::NegativeCount { index: 1, value: -1 })
        );
    }
}
