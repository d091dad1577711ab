//! Batch
//!
//! Evaluates many independent tables at once, optionally across the rayon
//! thread pool. Results keep the input order.
use crate::contingency;
use crate::errors::GTestError;
use crate::root_llr::root_log_likelihood_ratio;
use crate::validation::check_alpha;
use log::{info, warn};
use rayon::prelude::*;

fn map_tables<T, R, F>(tables: &[T], parallel: bool, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if parallel {
        tables.par_iter().map(f).collect()
    } else {
        tables.iter().map(f).collect()
    }
}

/// Independence p-value of every table.
pub fn p_values(tables: &[Vec<Vec<i64>>], parallel: bool) -> Vec<Result<f64, GTestError>> {
    map_tables(tables, parallel, |t| contingency::p_value(t))
}

/// Root log-likelihood ratio of every `[k11, k12, k21, k22]` table.
pub fn root_log_likelihood_ratios(tables: &[[i64; 4]], parallel: bool) -> Vec<Result<f64, GTestError>> {
    map_tables(tables, parallel, |&[k11, k12, k21, k22]| {
        root_log_likelihood_ratio(k11, k12, k21, k22)
    })
}

/// Indices of the tables whose independence hypothesis is rejected at
/// `alpha`. Invalid tables are skipped.
pub fn significant(tables: &[Vec<Vec<i64>>], alpha: f64, parallel: bool) -> Result<Vec<usize>, GTestError> {
    check_alpha(alpha)?;
    let mut rejected = Vec::new();
    let mut skipped = 0;
    for (i, p) in p_values(tables, parallel).into_iter().enumerate() {
        match p {
            Ok(p) if p < alpha => rejected.push(i),
            Ok(_) => (),
            Err(e) => {
                warn!("Skipping table {}: {}", i, e);
                skipped += 1;
            }
        }
    }
    info!(
        "{} of {} tables significant at alpha = {}, {} skipped.",
        rejected.len(),
        tables.len(),
        alpha,
        skipped
    );
    Ok(rejected)
}
