//! Higher-order combinators over slices: filter, map and left fold.
//!
//! Inputs are borrowed and never mutated. Each closure runs exactly once per
//! element, in slice order, so side-effecting closures observe a predictable
//! sequence of calls.

/// Returns the elements of `items` for which `predicate` holds, in their
/// original relative order.
///
/// ```
/// use generic_collections::filter;
///
/// let websites = ["http://foo.com", "https://bar.com", "https://gosamples.dev"];
/// let https = filter(&websites, |url| url.starts_with("https://"));
/// assert_eq!(https, ["https://bar.com", "https://gosamples.dev"]);
/// ```
pub fn filter<T, F>(items: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    let mut kept = Vec::new();
    for item in items {
        if predicate(item) {
            kept.push(item.clone());
        }
    }
    kept
}

/// Applies `transform` to each element; output index `i` holds
/// `transform(&items[i])`.
pub fn map_slice<T, M, F>(items: &[T], transform: F) -> Vec<M>
where
    F: FnMut(&T) -> M,
{
    let mut mapped = Vec::with_capacity(items.len());
    mapped.extend(items.iter().map(transform));
    mapped
}

/// Left fold: `combine(...combine(combine(init, &items[0]), &items[1])..., &items[n-1])`.
///
/// An empty slice returns `init` untouched.
pub fn reduce<T, M, F>(items: &[T], combine: F, init: M) -> M
where
    F: FnMut(M, &T) -> M,
{
    items.iter().fold(init, combine)
}
