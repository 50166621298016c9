use dsa_constraints::Number;

/// Arithmetic mean, accumulated in `f64`. An empty slice has mean 0.
///
/// # Examples
///
/// ```
/// use dsa_math::mean;
///
/// assert_eq!(mean(&[2u8, 4, 9]), 5.0);
/// assert_eq!(mean::<f32>(&[]), 0.0);
/// ```
pub fn mean<T: Number>(values: &[T]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let summation: f64 = values.iter().map(|v| v.to_f64()).sum();
    summation / values.len() as f64
}
