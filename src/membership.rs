use crate::constraints::Comparable;

/// True iff some element of `items` equals `target`. Stops at the first match.
pub fn contains<T: Comparable>(items: &[T], target: &T) -> bool {
    items.iter().any(|item| item == target)
}
