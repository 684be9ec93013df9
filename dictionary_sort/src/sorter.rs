//! Ascending sort.
//!
//! Equal values carry no identity of their own, so stability does not matter and
//! the unstable sort is used.

/// Sort `slice` into non-decreasing order in place.
pub fn sort<T: Ord>(slice: &mut [T]) {
    slice.sort_unstable();
    debug_assert!(is_sorted(slice));
    tracing::trace!(len = slice.len(), "sorted slice");
}

/// Consume `values` and return them in non-decreasing order.
pub fn sorted<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    sort(&mut values);
    values
}

/// Whether every adjacent pair `(a, b)` satisfies `a <= b`.
pub fn is_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|w| w[0] <= w[1])
}
