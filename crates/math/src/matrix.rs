//! Matrix shape checks.

use dsa_constraints::Integer;

/// Whether every row has the same number of columns as the first.
///
/// An empty matrix is valid.
///
/// # Examples
///
/// ```
/// use dsa_math::is_valid;
///
/// assert!(is_valid(&[vec![1, 2], vec![3, 4]]));
/// assert!(!is_valid(&[vec![1, 2], vec![3]]));
/// ```
pub fn is_valid<T: Integer>(elements: &[Vec<T>]) -> bool {
    match elements.first() {
        Some(first) => elements.iter().all(|row| row.len() == first.len()),
        None => true,
    }
}
