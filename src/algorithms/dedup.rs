use std::collections::HashSet;

/// The distinct values of `values`. Iteration order of the result is unspecified.
pub fn dedupe(values: &[i32]) -> HashSet<i32> {
    values.iter().copied().collect()
}
