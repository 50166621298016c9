//! The Möbius function μ(n).

/// Möbius function: 0 if `n` has a squared prime factor, otherwise `(-1)^k`
/// where `k` is the number of prime factors of `n`.
///
/// Inputs below 2 return 1.
///
/// # Examples
///
/// ```
/// use dsa_math::mu;
///
/// assert_eq!(mu(30), -1); // 2 * 3 * 5
/// assert_eq!(mu(12), 0);  // 2^2 * 3
/// assert_eq!(mu(1), 1);
/// ```
pub fn mu(n: i64) -> i8 {
    if n < 2 {
        return 1;
    }

    let mut n = n as u64;
    let mut result = 1;
    let mut p = 2u64;
    while p * p <= n {
        if n % p == 0 {
            n /= p;
            if n % p == 0 {
                return 0;
            }
            result = -result;
        }
        p += if p == 2 { 1 } else { 2 };
    }

    // Whatever remains is a single prime factor larger than sqrt(n).
    if n > 1 {
        result = -result;
    }
    result
}
