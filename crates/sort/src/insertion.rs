use dsa_constraints::Ordered;
use std::cmp::Ordering;

/// Insertion sort for slices with natural ordering.
///
/// Each element is shifted left past every larger element before it.
///
/// # Performance
///
/// - Time complexity: O(n²) worst case, O(n) best case (already sorted)
/// - Space complexity: O(1) - sorts in place
/// - Best for: Small arrays, nearly-sorted data, or when stability is required
///
/// # Examples
///
/// ```
/// use dsa_sort::insertion_sort;
///
/// let mut arr = vec![3, 1, 4, 1, 5, 9, 2, 6];
/// insertion_sort(&mut arr);
/// assert_eq!(arr, vec![1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn insertion_sort<T: Ordered>(arr: &mut [T]) {
    insert_each(arr, |a, b| a > b);
}

/// Insertion sort with a custom comparator.
///
/// # Examples
///
/// ```
/// use dsa_sort::insertion_sort_by;
///
/// let mut arr = vec![3, 1, 4, 1, 5];
/// insertion_sort_by(&mut arr, |a, b| b.cmp(a)); // Descending order
/// assert_eq!(arr, vec![5, 4, 3, 1, 1]);
/// ```
pub fn insertion_sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insert_each(arr, |a, b| compare(a, b) == Ordering::Greater);
}

/// Insertion sort with a key extraction function.
///
/// # Examples
///
/// ```
/// use dsa_sort::insertion_sort_by_key;
///
/// let mut arr = vec!["banana", "apple", "cherry"];
/// insertion_sort_by_key(&mut arr, |s| s.len());
/// assert_eq!(arr, vec!["apple", "banana", "cherry"]);
/// ```
pub fn insertion_sort_by_key<T, K, F>(arr: &mut [T], mut key: F)
where
    K: Ordered,
    F: FnMut(&T) -> K,
{
    insert_each(arr, |a, b| key(a) > key(b));
}

fn insert_each<T, F>(arr: &mut [T], mut is_greater: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for current in 1..arr.len() {
        let mut slot = current;
        while slot > 0 && is_greater(&arr[slot - 1], &arr[current]) {
            slot -= 1;
        }
        arr[slot..=current].rotate_right(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_sort_empty() {
        let mut arr: Vec<i32> = vec![];
        insertion_sort(&mut arr);
        let expected: Vec<i32> = vec![];
        assert_eq!(arr, expected);
    }

    #[test]
    fn test_insertion_sort_single() {
        let mut arr = vec![1];
        insertion_sort(&mut arr);
        assert_eq!(arr, vec![1]);
    }

    #[test]
    fn test_insertion_sort_sorted() {
        let mut arr = vec![1, 2, 3, 4, 5];
        insertion_sort(&mut arr);
        assert_eq!(arr, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insertion_sort_reverse() {
        let mut arr = vec![5, 4, 3, 2, 1];
        insertion_sort(&mut arr);
        assert_eq!(arr, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insertion_sort_strings() {
        let mut arr = vec!["banana", "apple", "cherry"];
        insertion_sort(&mut arr);
        assert_eq!(arr, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_insertion_sort_floats() {
        let mut arr = vec![0.5, -2.0, 1.5, 0.0];
        insertion_sort(&mut arr);
        assert_eq!(arr, vec![-2.0, 0.0, 0.5, 1.5]);
    }

    #[test]
    fn test_insertion_sort_by_key_length_is_stable() {
        let mut arr = vec!["aaa", "b", "cc", "d"];
        insertion_sort_by_key(&mut arr, |s| s.len());
        assert_eq!(arr, vec!["b", "d", "cc", "aaa"]);
    }
}
