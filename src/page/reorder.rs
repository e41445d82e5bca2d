//! Reorder engine: move one element of an ordered list to a new position.

/// Return a copy of `items` with the element at `from` moved to `to`.
///
/// Every other element keeps its relative order. `from == to` yields an
/// unchanged copy. The input slice is never mutated.
///
/// # Panics
///
/// Panics if either index is out of range. Callers derive both indices from
/// an id lookup on the same list, so an out-of-range index is a bug.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    assert!(
        from < items.len() && to < items.len(),
        "array_move index out of range: from={from} to={to} len={}",
        items.len()
    );

    let mut moved = items.to_vec();
    if from != to {
        let item = moved.remove(from);
        moved.insert(to, item);
    }
    moved
}
