//! Contingency
//!
//! G-test of independence for an r×c table of counts. Expected cell counts
//! are `R_i * C_j / N` and the degrees of freedom `(r - 1)(c - 1)`.
use crate::decision::{decide, upper_tail_probability, TestResult};
use crate::errors::GTestError;
use crate::statistic::g_term;
use crate::utils::count_sum;
use crate::validation::{check_alpha, check_marginals, check_rectangular, check_table_counts};

/// Row sums of a rectangular table, accumulated as floats so that large
/// counts cannot overflow.
pub fn row_sums(table: &[Vec<i64>]) -> Vec<f64> {
    table.iter().map(|row| count_sum(row)).collect()
}

/// Column sums of a rectangular table, accumulated as floats.
pub fn col_sums(table: &[Vec<i64>]) -> Vec<f64> {
    let cols = table.first().map_or(0, Vec::len);
    let mut sums = vec![0.0; cols];
    for row in table {
        for (s, &v) in sums.iter_mut().zip(row) {
            *s += v as f64;
        }
    }
    sums
}

fn validate(table: &[Vec<i64>]) -> Result<(Vec<f64>, Vec<f64>), GTestError> {
    check_rectangular(table)?;
    check_table_counts(table)?;
    let rows = row_sums(table);
    let cols = col_sums(table);
    check_marginals(&rows, &cols)?;
    Ok((rows, cols))
}

fn degrees_of_freedom(table: &[Vec<i64>]) -> usize {
    (table.len() - 1) * (table[0].len() - 1)
}

/// Statistic from precomputed marginals.
///
/// Cells in a zero row or column are themselves zero and contribute
/// nothing, so degenerate tables give a finite result.
fn statistic_from_marginals(table: &[Vec<i64>], rows: &[f64], cols: &[f64]) -> f64 {
    let total: f64 = rows.iter().sum();
    if total == 0.0 {
        return 0.0;
    }
    let mut sum = 0.0;
    for (row, &r) in table.iter().zip(rows) {
        for (&cell, &c) in row.iter().zip(cols) {
            sum += g_term(cell, r * c / total);
        }
    }
    2.0 * sum
}

/// Statistic of a table that is known to be rectangular and non-negative,
/// without rejecting zero rows or columns.
pub(crate) fn unchecked_statistic(table: &[Vec<i64>]) -> f64 {
    statistic_from_marginals(table, &row_sums(table), &col_sums(table))
}

/// Expected cell counts under independence.
pub fn expected_counts(table: &[Vec<i64>]) -> Result<Vec<Vec<f64>>, GTestError> {
    let (rows, cols) = validate(table)?;
    let total: f64 = rows.iter().sum();
    Ok(rows
        .iter()
        .map(|&r| cols.iter().map(|&c| r * c / total).collect())
        .collect())
}

/// G statistic of independence for `table`.
pub fn statistic(table: &[Vec<i64>]) -> Result<f64, GTestError> {
    let (rows, cols) = validate(table)?;
    Ok(statistic_from_marginals(table, &rows, &cols))
}

/// Statistic, degrees of freedom and p-value.
pub fn evaluate(table: &[Vec<i64>]) -> Result<TestResult, GTestError> {
    let g = statistic(table)?;
    TestResult::new(g, degrees_of_freedom(table))
}

/// p-value of the independence test.
pub fn p_value(table: &[Vec<i64>]) -> Result<f64, GTestError> {
    let g = statistic(table)?;
    upper_tail_probability(g, degrees_of_freedom(table))
}

/// Whether the rows and columns are dependent at significance level `alpha`.
pub fn test(table: &[Vec<i64>], alpha: f64) -> Result<bool, GTestError> {
    check_alpha(alpha)?;
    let g = statistic(table)?;
    decide(g, degrees_of_freedom(table), alpha)
}
