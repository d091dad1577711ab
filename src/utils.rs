/// Create a string of all available items.
pub fn items_to_strings(items: Vec<&str>) -> String {
    let mut s = String::new();
    for i in items {
        s.push_str(i);
        s.push_str(&String::from(", "));
    }
    s
}

/// Format counts for log output.
pub fn fmt_counts(v: &[i64]) -> String {
    v.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(", ")
}

/// Sum of counts as a float, without intermediate overflow.
#[inline]
pub fn count_sum(v: &[i64]) -> f64 {
    v.iter().map(|&c| c as f64).sum()
}

pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}
