//! Randomized in-place quicksort.
//!
//! Average O(n log n) time, O(n²) worst case. The recursion always descends
//! into the smaller side of a partition and loops on the larger one, so the
//! stack depth stays O(log n) even on adversarial inputs.

use dsa_constraints::Ordered;
use rand::Rng;
use std::cmp::Ordering;

/// Sorts a slice in place using quicksort with a uniformly random pivot.
///
/// Not stable: equal elements may be reordered relative to each other.
///
/// # Examples
///
/// ```
/// use dsa_sort::quicksort;
///
/// let mut arr = vec!["pear", "fig", "apple"];
/// quicksort(&mut arr);
/// assert_eq!(arr, vec!["apple", "fig", "pear"]);
/// ```
pub fn quicksort<T: Ordered>(arr: &mut [T]) {
    quicksort_with_rng(arr, &mut rand::thread_rng());
}

/// Quicksort drawing pivot indices from the supplied random number generator.
///
/// Seeding the generator makes the resulting order of equal elements reproducible.
///
/// # Examples
///
/// ```
/// use dsa_sort::quicksort_with_rng;
/// use rand::rngs::mock::StepRng;
///
/// let mut arr = vec![5, 3, 8, 1];
/// quicksort_with_rng(&mut arr, &mut StepRng::new(0, 1));
/// assert_eq!(arr, vec![1, 3, 5, 8]);
/// ```
pub fn quicksort_with_rng<T, R>(arr: &mut [T], rng: &mut R)
where
    T: Ordered,
    R: Rng + ?Sized,
{
    sort_range(arr, rng, &mut |a: &T, b: &T| a < b);
}

/// Quicksort with a custom comparator.
///
/// # Examples
///
/// ```
/// use dsa_sort::quicksort_by;
///
/// let mut arr = vec![3, 1, 4, 1, 5];
/// quicksort_by(&mut arr, |a, b| b.cmp(a)); // Descending order
/// assert_eq!(arr, vec![5, 4, 3, 1, 1]);
/// ```
pub fn quicksort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    sort_range(arr, &mut rand::thread_rng(), &mut |a: &T, b: &T| {
        compare(a, b) == Ordering::Less
    });
}

fn sort_range<T, R, F>(mut arr: &mut [T], rng: &mut R, is_less: &mut F)
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    while arr.len() >= 2 {
        let pivot = partition_at_random(arr, rng, is_less);
        let (left, rest) = std::mem::take(&mut arr).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            sort_range(left, rng, is_less);
            arr = right;
        } else {
            sort_range(right, rng, is_less);
            arr = left;
        }
    }
}

/// Lomuto partition around a random pivot. Returns the pivot's final index:
/// everything before it is strictly less, everything after it is not.
fn partition_at_random<T, R, F>(arr: &mut [T], rng: &mut R, is_less: &mut F) -> usize
where
    R: Rng + ?Sized,
    F: FnMut(&T, &T) -> bool,
{
    let last = arr.len() - 1;
    let pivot = rng.gen_range(0..arr.len());
    arr.swap(pivot, last);

    let mut left = 0;
    for i in 0..last {
        if is_less(&arr[i], &arr[last]) {
            arr.swap(left, i);
            left += 1;
        }
    }

    arr.swap(left, last);
    left
}
