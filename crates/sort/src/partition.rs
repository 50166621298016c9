use dsa_constraints::Ordered;

/// Rearranges a slice around its last element.
///
/// Elements less than or equal to the pivot end up to its left and greater
/// elements to its right. Returns the pivot's final index, or `None` for an
/// empty slice. To partition `arr[low..=high]`, pass that sub-slice; the
/// returned index is relative to `low`.
///
/// # Examples
///
/// ```
/// use dsa_sort::partition;
///
/// let mut arr = vec![9, 2, 7, 1, 5];
/// let p = partition(&mut arr).unwrap();
/// assert_eq!(p, 2);
/// assert_eq!(arr[p], 5);
/// assert!(arr[..p].iter().all(|&v| v <= 5));
/// assert!(arr[p + 1..].iter().all(|&v| v > 5));
/// ```
pub fn partition<T: Ordered>(arr: &mut [T]) -> Option<usize> {
    let high = arr.len().checked_sub(1)?;

    let mut index = 0;
    for i in 0..high {
        if arr[i] <= arr[high] {
            arr.swap(index, i);
            index += 1;
        }
    }

    arr.swap(index, high);
    Some(index)
}
