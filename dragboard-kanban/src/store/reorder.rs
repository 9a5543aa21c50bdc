//! Pure reordering helpers.
//!
//! Every function here takes a borrowed sequence and returns a new one. The
//! store swaps the result in with a single assignment, so a handler that is
//! interrupted half way never leaves a partially reordered sequence behind.

/// Move the element at `from` so that it ends up at index `to`.
///
/// Elements between the two indices shift by one towards the gap. Out of
/// range indices return an unchanged copy.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    if from >= out.len() || to >= out.len() || from == to {
        return out;
    }
    let item = out.remove(from);
    out.insert(to, item);
    out
}

/// Copy `items`, replacing the element at `index` with `f(element)`.
pub fn map_at<T: Clone>(items: &[T], index: usize, f: impl Fn(&T) -> T) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| if i == index { f(item) } else { item.clone() })
        .collect()
}
