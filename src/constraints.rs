//! Shared type contracts for the collection helpers.
//!
//! `Ordered` plays the role of an "orderable" bound: every implementor exposes a
//! total order, so helpers built on it can sort floats without tripping over NaN.
//! `Comparable` and `MapKey` are blanket marker traits that name the equality and
//! hashing requirements used by membership tests and key extraction.

use std::cmp::Ordering;
use std::hash::Hash;

/// A type with a natural total order and a zero value.
///
/// `Default` supplies the value returned by [`crate::min`] and [`crate::max`]
/// for an empty slice.
pub trait Ordered: PartialOrd + Clone + Default {
    fn total_order(&self, other: &Self) -> Ordering;
}

/// Types that can be searched for with `==`.
pub trait Comparable: PartialEq {}

impl<T: PartialEq + ?Sized> Comparable for T {}

/// Types usable as mapping keys.
pub trait MapKey: Eq + Hash + Clone {}

impl<K: Eq + Hash + Clone> MapKey for K {}

macro_rules! impl_ordered_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ordered for $t {
                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

macro_rules! impl_ordered_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Ordered for $t {
                #[inline]
                fn total_order(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )*
    };
}

impl_ordered_via_ord!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_ordered_via_ord!(char, String);
impl_ordered_float!(f32, f64);

impl Ordered for &str {
    #[inline]
    fn total_order(&self, other: &Self) -> Ordering {
        Ord::cmp(*self, *other)
    }
}
