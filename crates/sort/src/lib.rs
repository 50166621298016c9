//! In-place sorting routines.
//!
//! - [`quicksort`]: randomized-pivot quicksort over Lomuto partitioning
//! - [`partition`]: a single Lomuto partition step around the last element
//! - [`bubble_sort`] and [`insertion_sort`]: stable quadratic sorts for small inputs
//!
//! All functions reorder the caller's slice; no elements are created or dropped.
//!
//! # Example
//!
//! ```
//! use dsa_sort::quicksort;
//!
//! let mut arr = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! quicksort(&mut arr);
//! assert_eq!(arr, vec![1, 1, 2, 3, 4, 5, 6, 9]);
//! ```

mod bubble;
mod insertion;
mod partition;
mod quicksort;

pub use bubble::{bubble_sort, bubble_sort_by};
pub use insertion::{insertion_sort, insertion_sort_by, insertion_sort_by_key};
pub use partition::partition;
pub use quicksort::{quicksort, quicksort_by, quicksort_with_rng};
