//! Association
//!
//! Builds 2×2 co-occurrence tables from event counts and ranks item pairs by
//! their root log-likelihood ratio, for association mining and anomaly
//! detection over transactions.
use crate::errors::GTestError;
use crate::root_llr::root_log_likelihood_ratio;
use crate::validation::check_counts;
use hashbrown::{HashMap, HashSet};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::hash::Hash;

/// Co-occurrence table `[k11, k12, k21, k22]` from marginal event counts.
///
/// * `both` - Transactions containing A and B.
/// * `count_a` - Transactions containing A.
/// * `count_b` - Transactions containing B.
/// * `total` - All transactions.
///
/// Inputs must be non-negative. A count that implies a negative cell is
/// reported against that cell's position in the table.
pub fn table_from_counts(both: i64, count_a: i64, count_b: i64, total: i64) -> Result<[i64; 4], GTestError> {
    check_counts(&[both, count_a, count_b, total])?;
    let k12 = count_a - both;
    let k21 = count_b - both;
    check_counts(&[both, k12, k21])?;
    // total - count_a - count_b can leave the i64 range before both is added back
    let neither = i128::from(total) - i128::from(count_a) - i128::from(count_b) + i128::from(both);
    let k22 = i64::try_from(neither).map_err(|_| GTestError::NegativeCount {
        index: 3,
        value: i64::MIN,
    })?;
    let table = [both, k12, k21, k22];
    check_counts(&table)?;
    Ok(table)
}

/// Counts items and item pairs over a stream of transactions.
#[derive(Debug, Clone)]
pub struct CooccurrenceCounter<T: Hash + Eq> {
    transactions: i64,
    items: HashMap<T, i64>,
    pairs: HashMap<(T, T), i64>,
}

impl<T: Hash + Eq + Ord + Clone> Default for CooccurrenceCounter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Ord + Clone> CooccurrenceCounter<T> {
    pub fn new() -> Self {
        CooccurrenceCounter {
            transactions: 0,
            items: HashMap::new(),
            pairs: HashMap::new(),
        }
    }

    fn key(a: &T, b: &T) -> (T, T) {
        if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }

    /// Record one transaction. Repeated items within it count once.
    pub fn observe<I: IntoIterator<Item = T>>(&mut self, items: I) {
        let unique: HashSet<T> = items.into_iter().collect();
        let mut sorted: Vec<&T> = unique.iter().collect();
        sorted.sort();
        for (i, a) in sorted.iter().enumerate() {
            *self.items.entry((*a).clone()).or_insert(0) += 1;
            for b in &sorted[i + 1..] {
                *self.pairs.entry(((*a).clone(), (*b).clone())).or_insert(0) += 1;
            }
        }
        self.transactions += 1;
    }

    pub fn transactions(&self) -> i64 {
        self.transactions
    }

    pub fn item_count(&self, item: &T) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn pair_count(&self, a: &T, b: &T) -> i64 {
        if a == b {
            return self.item_count(a);
        }
        self.pairs.get(&Self::key(a, b)).copied().unwrap_or(0)
    }

    /// 2×2 table of A against B.
    pub fn table(&self, a: &T, b: &T) -> Result<[i64; 4], GTestError> {
        table_from_counts(
            self.pair_count(a, b),
            self.item_count(a),
            self.item_count(b),
            self.transactions,
        )
    }

    /// Signed association score of A with B.
    pub fn score(&self, a: &T, b: &T) -> Result<f64, GTestError> {
        let [k11, k12, k21, k22] = self.table(a, b)?;
        root_log_likelihood_ratio(k11, k12, k21, k22)
    }

    /// The `limit` highest scoring pairs among those seen together at least
    /// once, highest score first.
    pub fn top_associations(&self, limit: usize, parallel: bool) -> Result<Vec<(T, T, f64)>, GTestError>
    where
        T: Send + Sync,
    {
        let pairs: Vec<&(T, T)> = self.pairs.keys().collect();
        let score = |&(a, b): &&(T, T)| self.score(a, b).map(|s| (a.clone(), b.clone(), s));
        let mut scored: Vec<(T, T, f64)> = if parallel {
            pairs.par_iter().map(score).collect::<Result<_, _>>()?
        } else {
            pairs.iter().map(score).collect::<Result<_, _>>()?
        };
        scored.sort_by(|x, y| match y.2.total_cmp(&x.2) {
            Ordering::Equal => (&x.0, &x.1).cmp(&(&y.0, &y.1)),
            o => o,
        });
        scored.truncate(limit);
        Ok(scored)
    }
}
