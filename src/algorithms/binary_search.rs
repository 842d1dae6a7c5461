/// Index of `target` in `sorted`, or `None` if it is absent.
///
/// `sorted` must be in ascending order. With duplicates, any matching index
/// may be returned.
pub fn find<T: Ord>(sorted: &[T], target: &T) -> Option<usize> {
    // Half-open [left, right) so the bounds never underflow.
    let mut left = 0;
    let mut right = sorted.len();

    while left < right {
        let mid = left + (right - left) / 2;
        match sorted[mid].cmp(target) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => left = mid + 1,
            std::cmp::Ordering::Greater => right = mid,
        }
    }
    None
}
