//! # Generic Collection Utilities
//!
//! Small generic helpers over slices and hash maps.
//!
//! ## Helpers
//!
//! 1. **Ordering**
//!    - `min` / `max` (zero value on empty input)
//!    - `try_min` / `try_max` (error on empty input)
//!    - `sort_slice` (in place, total order, unstable)
//!
//! 2. **Mapping keys**
//!    - `keys` (any hasher; order unspecified)
//!
//! 3. **Combinators**
//!    - `filter`, `map_slice`, `reduce` (left fold)
//!
//! 4. **Membership**
//!    - `contains` (early exit)
//!
//! ## Running the Demonstration
//!
//! ```bash
//! cargo run --bin collections_demo
//! cargo run --bin collections_demo -- datasets.toml
//! ```

pub mod combinators;
pub mod config;
pub mod constraints;
pub mod demo;
pub mod error;
pub mod mapping;
pub mod membership;
pub mod ordering;

pub use combinators::{filter, map_slice, reduce};
pub use constraints::{Comparable, MapKey, Ordered};
pub use error::CollectionError;
pub use mapping::keys;
pub use membership::contains;
pub use ordering::{is_sorted, max, min, sort_slice, try_max, try_min};
