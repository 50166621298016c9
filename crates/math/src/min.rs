use dsa_constraints::Integer;

/// Smallest of the given integers, or `None` when there are none.
///
/// # Examples
///
/// ```
/// use dsa_math::min;
///
/// assert_eq!(min(&[3, -1, 2]), Some(-1));
/// assert_eq!(min::<u16>(&[]), None);
/// ```
pub fn min<T: Integer>(values: &[T]) -> Option<T> {
    values.iter().copied().min()
}
