//! Validation
//!
//! Precondition checks shared by every engine. Each check reports the first
//! violation it finds and nothing else.
use crate::constants::MIN_CATEGORIES;
use crate::errors::{GTestError, Marginal};

/// Paired sequences must have the same length.
pub fn check_same_length<A, B>(a: &[A], b: &[B]) -> Result<(), GTestError> {
    if a.len() != b.len() {
        Err(GTestError::LengthMismatch {
            expected: a.len(),
            found: b.len(),
        })
    } else {
        Ok(())
    }
}

pub fn check_min_categories(len: usize, min: usize) -> Result<(), GTestError> {
    if len < min {
        Err(GTestError::TooFewCategories {
            required: min,
            found: len,
        })
    } else {
        Ok(())
    }
}

/// Observed counts must be non-negative.
pub fn check_counts(observed: &[i64]) -> Result<(), GTestError> {
    match observed.iter().enumerate().find(|(_, &v)| v < 0) {
        Some((index, &value)) => Err(GTestError::NegativeCount { index, value }),
        None => Ok(()),
    }
}

/// Expected values must be finite and strictly positive.
pub fn check_expected(expected: &[f64]) -> Result<(), GTestError> {
    match expected.iter().enumerate().find(|(_, v)| !(v.is_finite() && **v > 0.0)) {
        Some((index, &value)) => Err(GTestError::NonPositiveExpected { index, value }),
        None => Ok(()),
    }
}

/// A contingency table needs at least 2 rows, at least 2 columns and rows
/// of identical length.
pub fn check_rectangular(table: &[Vec<i64>]) -> Result<(), GTestError> {
    check_min_categories(table.len(), MIN_CATEGORIES)?;
    let cols = table[0].len();
    check_min_categories(cols, MIN_CATEGORIES)?;
    match table.iter().find(|row| row.len() != cols) {
        Some(row) => Err(GTestError::LengthMismatch {
            expected: cols,
            found: row.len(),
        }),
        None => Ok(()),
    }
}

/// Non-negative counts across every row of a table.
pub fn check_table_counts(table: &[Vec<i64>]) -> Result<(), GTestError> {
    let cols = table.first().map_or(0, Vec::len);
    for (i, row) in table.iter().enumerate() {
        check_counts(row).map_err(|e| match e {
            // report the position in row-major order
            GTestError::NegativeCount { index, value } => GTestError::NegativeCount {
                index: i * cols + index,
                value,
            },
            other => other,
        })?;
    }
    Ok(())
}

/// Every row and column sum must be positive.
pub fn check_marginals(row_sums: &[f64], col_sums: &[f64]) -> Result<(), GTestError> {
    if let Some(i) = row_sums.iter().position(|&s| s == 0.0) {
        return Err(GTestError::DegenerateMarginal(Marginal::Row(i)));
    }
    if let Some(j) = col_sums.iter().position(|&s| s == 0.0) {
        return Err(GTestError::DegenerateMarginal(Marginal::Column(j)));
    }
    Ok(())
}

/// Significance level must lie strictly between 0 and 1.
pub fn check_alpha(alpha: f64) -> Result<(), GTestError> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(GTestError::OutOfRangeSignificance(alpha))
    }
}
