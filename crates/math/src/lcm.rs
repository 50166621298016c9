use crate::gcd::gcd;
use crate::MathError;
use dsa_constraints::Integer;

/// Least common multiple of `|a|` and `|b|`, using `lcm(a, b) * gcd(a, b) = |a * b|`.
///
/// `lcm(0, x)` is 0.
///
/// # Errors
///
/// Returns [`MathError::Overflow`] when the result does not fit in `u128`.
///
/// # Examples
///
/// ```
/// use dsa_math::{lcm, MathError};
///
/// assert_eq!(lcm(4, -6), Ok(12));
/// assert_eq!(lcm(0, 5), Ok(0));
/// assert_eq!(lcm(u128::MAX, u128::MAX - 1), Err(MathError::Overflow));
/// ```
pub fn lcm<T: Integer>(a: T, b: T) -> Result<u128, MathError> {
    let a = a.unsigned_abs_u128();
    let b = b.unsigned_abs_u128();
    if a == 0 || b == 0 {
        return Ok(0);
    }

    (a / gcd(a, b)).checked_mul(b).ok_or(MathError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lcm_basic() {
        assert_eq!(lcm(21, 6), Ok(42));
        assert_eq!(lcm(7u8, 7), Ok(7));
        assert_eq!(lcm(1, 99), Ok(99));
    }

    #[test]
    fn test_lcm_wider_than_input() {
        // Both fit in u8, the result does not.
        assert_eq!(lcm(255u8, 254), Ok(64770));
    }

    #[test]
    fn test_lcm_gcd_identity() {
        for a in 1i64..40 {
            for b in -40i64..40 {
                if b == 0 {
                    continue;
                }
                let product = (a * b).unsigned_abs() as u128;
                assert_eq!(lcm(a, b).unwrap() * gcd(a, b), product);
                assert_eq!(lcm(a, b), lcm(b, a));
            }
        }
    }
}
