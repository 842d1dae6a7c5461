/// Sorts `values` in place. Unstable.
pub fn quicksort<T: Ord>(values: &mut [T]) {
    if values.len() > 1 {
        quicksort_range(values, 0, values.len() - 1);
    }
}

/// Sorts `values[left..=right]` in place.
///
/// Ranges are kept on an explicit work stack instead of recursing. The smaller
/// side is always processed next, so the stack stays logarithmic in the range
/// length. Panics if `right` is out of bounds for a non-empty range.
pub fn quicksort_range<T: Ord>(values: &mut [T], left: usize, right: usize) {
    let mut pending = vec![(left, right)];

    while let Some((lo, hi)) = pending.pop() {
        if lo >= hi {
            continue;
        }

        let p = partition(values, lo, hi);
        // `p == lo` yields an empty lower range, skipped on the next pop.
        let below = (lo, p.saturating_sub(1));
        let above = (p + 1, hi);

        if p - lo > hi - p {
            pending.push(below);
            pending.push(above);
        } else {
            pending.push(above);
            pending.push(below);
        }
    }
}

/// Lomuto partition around `values[right]`.
///
/// Returns the pivot's final index: everything left of it is smaller, and
/// nothing right of it is.
pub fn partition<T: Ord>(values: &mut [T], left: usize, right: usize) -> usize {
    let mut store = left;
    for j in left..right {
        if values[j] < values[right] {
            values.swap(store, j);
            store += 1;
        }
    }
    values.swap(store, right);
    store
}
