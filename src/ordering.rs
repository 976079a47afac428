//! Ordering helpers: extremum search and in-place sorting.

use std::cmp::Ordering;

use crate::constraints::Ordered;
use crate::error::CollectionError;

/// Smallest element of `items`, or the first of several equal minima.
///
/// Returns `CollectionError::EmptyInput` when `items` is empty.
pub fn try_min<T: Ordered>(items: &[T]) -> Result<&T, CollectionError> {
    let (first, rest) = items
        .split_first()
        .ok_or_else(|| CollectionError::empty_input("try_min"))?;

    Ok(rest.iter().fold(first, |current, candidate| {
        if current.total_order(candidate) == Ordering::Greater {
            candidate
        } else {
            current
        }
    }))
}

/// Largest element of `items`, or the first of several equal maxima.
pub fn try_max<T: Ordered>(items: &[T]) -> Result<&T, CollectionError> {
    let (first, rest) = items
        .split_first()
        .ok_or_else(|| CollectionError::empty_input("try_max"))?;

    Ok(rest.iter().fold(first, |current, candidate| {
        if current.total_order(candidate) == Ordering::Less {
            candidate
        } else {
            current
        }
    }))
}

/// Minimum of `items`; an empty slice yields `T::default()`.
///
/// ```
/// use generic_collections::min;
///
/// assert_eq!(min(&[10, 2, 4, 1, 6, 8, 2]), 1);
/// assert_eq!(min::<i32>(&[]), 0);
/// ```
pub fn min<T: Ordered>(items: &[T]) -> T {
    try_min(items).cloned().unwrap_or_default()
}

/// Maximum of `items`; an empty slice yields `T::default()`.
pub fn max<T: Ordered>(items: &[T]) -> T {
    try_max(items).cloned().unwrap_or_default()
}

/// Sorts `items` into non-decreasing order. Not stable.
pub fn sort_slice<T: Ordered>(items: &mut [T]) {
    items.sort_unstable_by(|a, b| a.total_order(b));
}

/// True when `items` is non-decreasing under [`Ordered::total_order`].
///
/// Unlike `slice::is_sorted`, a slice holding NaN can pass: NaN sorts last.
pub fn is_sorted<T: Ordered>(items: &[T]) -> bool {
    items
        .windows(2)
        .all(|w| w[0].total_order(&w[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_ints() {
        assert_eq!(min(&[10, 2, 4, 1, 6, 8, 2]), 1);
    }

    #[test]
    fn test_max_floats() {
        assert_eq!(max(&[3.2, 5.1, 6.2, 7.6, 8.2, 1.5, 4.8]), 8.2);
    }

    #[test]
    fn test_empty_returns_zero_value() {
        let empty_ints: [i64; 0] = [];
        assert_eq!(min(&empty_ints), 0);
        assert_eq!(max(&empty_ints), 0);

        let empty_strings: [String; 0] = [];
        assert_eq!(min(&empty_strings), "");
        assert_eq!(max::<f64>(&[]), 0.0);
    }

    #[test]
    fn test_strict_variants_report_empty_input() {
        assert_eq!(
            try_min::<u8>(&[]),
            Err(CollectionError::EmptyInput { operation: "try_min" })
        );
        assert_eq!(
            try_max::<u8>(&[]),
            Err(CollectionError::EmptyInput { operation: "try_max" })
        );
        assert_eq!(try_max(&[3u8, 9, 1]), Ok(&9));
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let firsts = vec![2, 1, 1, 2];
        let min_ref = try_min(&firsts).unwrap();
        let max_ref = try_max(&firsts).unwrap();
        assert!(std::ptr::eq(min_ref, &firsts[1]));
        assert!(std::ptr::eq(max_ref, &firsts[0]));
    }

    #[test]
    fn test_float_extrema_follow_total_order() {
        // -0.0 orders below 0.0, so it is not a tie
        assert!(min(&[0.0f64, -0.0]).is_sign_negative());
        assert!(max(&[-0.0f64, 0.0]).is_sign_positive());

        // positive NaN orders above +inf, negative NaN below -inf
        assert!(max(&[1.0f64, f64::NAN]).is_nan());
        assert!(min(&[1.0f64, -f64::NAN]).is_nan());
        assert_eq!(min(&[1.0f64, f64::NAN]), 1.0);
        assert_eq!(max(&[f64::INFINITY, -f64::NAN]), f64::INFINITY);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(min(&["only"]), "only");
        assert_eq!(max(&['q']), 'q');
    }

    #[test]
    fn test_sort_floats() {
        let mut floats = vec![2.3, 1.2, 0.2, 51.2];
        sort_slice(&mut floats);
        assert_eq!(floats, vec![0.2, 1.2, 2.3, 51.2]);
    }

    #[test]
    fn test_sort_strings_and_ints() {
        let mut strings = vec!["z", "a", "b"];
        sort_slice(&mut strings);
        assert_eq!(strings, vec!["a", "b", "z"]);

        let mut ints = vec![0, 3, 2, 1, 6];
        sort_slice(&mut ints);
        assert_eq!(ints, vec![0, 1, 2, 3, 6]);
    }

    #[test]
    fn test_sort_trivial_inputs() {
        let mut empty: Vec<i32> = Vec::new();
        sort_slice(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![42];
        sort_slice(&mut single);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_sort_with_nan_does_not_panic() {
        let mut floats = vec![f64::NAN, 1.0, f64::NEG_INFINITY, 0.5];
        sort_slice(&mut floats);
        assert_eq!(&floats[..3], &[f64::NEG_INFINITY, 0.5, 1.0]);
        assert!(floats[3].is_nan());
        assert!(is_sorted(&floats));
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
        assert!(is_sorted(&[1.0, f64::INFINITY, f64::NAN]));
        assert!(!is_sorted(&[f64::NAN, 1.0]));
    }
}
