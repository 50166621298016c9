use dsa_constraints::Ordered;
use std::cmp::Ordering;

/// Bubble sort for slices with natural ordering.
///
/// Repeatedly swaps adjacent out-of-order pairs until a full pass makes no
/// swap. Stable; O(n²) worst case, O(n) on already sorted input.
///
/// # Examples
///
/// ```
/// use dsa_sort::bubble_sort;
///
/// let mut arr = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// bubble_sort(&mut arr);
/// assert_eq!(arr, vec![1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn bubble_sort<T: Ordered>(arr: &mut [T]) {
    bubble(arr, |a, b| a < b);
}

/// Bubble sort with a custom comparator.
///
/// # Examples
///
/// ```
/// use dsa_sort::bubble_sort_by;
///
/// let mut arr = vec![3, 1, 4, 1, 5];
/// bubble_sort_by(&mut arr, |a, b| b.cmp(a)); // Descending order
/// assert_eq!(arr, vec![5, 4, 3, 1, 1]);
/// ```
pub fn bubble_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble(arr, |a, b| compare(a, b) == Ordering::Less);
}

fn bubble<T, F>(arr: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // After each pass the largest remaining element has settled at `end`.
    let mut end = arr.len();
    let mut swapped = true;
    while swapped && end > 1 {
        swapped = false;
        for i in 0..end - 1 {
            if is_less(&arr[i + 1], &arr[i]) {
                arr.swap(i, i + 1);
                swapped = true;
            }
        }
        end -= 1;
    }
}
