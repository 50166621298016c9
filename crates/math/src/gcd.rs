//! Greatest common divisor by Euclid's algorithm.

use dsa_constraints::Integer;

/// Greatest common divisor of `|a|` and `|b|`, computed iteratively.
///
/// The result is widened to `u128` so that magnitudes such as
/// `i64::MIN.unsigned_abs()` are representable. `gcd(0, 0)` is 0.
///
/// # Examples
///
/// ```
/// use dsa_math::gcd;
///
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(-7, 0), 7);
/// assert_eq!(gcd(i64::MIN, 0), 1u128 << 63);
/// ```
pub fn gcd<T: Integer>(a: T, b: T) -> u128 {
    let mut a = a.unsigned_abs_u128();
    let mut b = b.unsigned_abs_u128();
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Greatest common divisor, recursive formulation. Same contract as [`gcd`].
///
/// Recursion depth is logarithmic in the smaller argument.
pub fn gcd_recursive<T: Integer>(a: T, b: T) -> u128 {
    fn euclid(a: u128, b: u128) -> u128 {
        if b == 0 {
            a
        } else {
            euclid(b, a % b)
        }
    }

    euclid(a.unsigned_abs_u128(), b.unsigned_abs_u128())
}
