//! Generic type constraints for the algorithm crates.
//!
//! These traits restrict generic functions to numeric or ordered element
//! types, in the spirit of `golang.org/x/exp/constraints`:
//!
//! - [`Signed`] / [`Unsigned`] / [`Integer`] for primitive integers
//! - [`Float`] for `f32` and `f64`
//! - [`Number`] for every primitive integer or float
//! - [`Ordered`] for anything comparable with `<`
//!
//! # Example
//!
//! ```
//! use dsa_constraints::Number;
//!
//! fn total<T: Number>(values: &[T]) -> f64 {
//!     values.iter().map(|v| v.to_f64()).sum()
//! }
//!
//! assert_eq!(total(&[1u8, 2, 3]), 6.0);
//! assert_eq!(total(&[0.5f32, 0.25]), 0.75);
//! ```

use std::fmt::Debug;
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Any primitive numeric type, excluding complex numbers.
pub trait Number:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;

    /// Lossy widening to `f64`, used for statistics.
    fn to_f64(self) -> f64;
}

/// Primitive integer types, signed or unsigned.
pub trait Integer: Number + Ord + Eq + Hash {
    /// Magnitude of the value as `u128`. Never overflows, including for `i128::MIN`.
    fn unsigned_abs_u128(self) -> u128;
}

/// Signed primitive integers.
pub trait Signed: Integer + Neg<Output = Self> {}

/// Unsigned primitive integers.
pub trait Unsigned: Integer {}

/// Floating-point primitives.
pub trait Float: Number + Neg<Output = Self> {}

/// Types supporting ordering with `<`.
///
/// Floats are included even though NaN breaks totality; sorting a slice
/// containing NaN yields an unspecified (but memory-safe) order.
pub trait Ordered: PartialOrd {}

macro_rules! impl_number {
    ($zero:expr, $one:expr; $($t:ty),*) => {
        $(
            impl Number for $t {
                const ZERO: Self = $zero;
                const ONE: Self = $one;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }

            impl Ordered for $t {}
        )*
    };
}

impl_number!(0, 1; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(0.0, 1.0; f32, f64);

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl Integer for $t {
                #[inline]
                fn unsigned_abs_u128(self) -> u128 {
                    self.unsigned_abs() as u128
                }
            }

            impl Signed for $t {}
        )*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl Integer for $t {
                #[inline]
                fn unsigned_abs_u128(self) -> u128 {
                    self as u128
                }
            }

            impl Unsigned for $t {}
        )*
    };
}

impl_signed!(i8, i16, i32, i64, i128, isize);
impl_unsigned!(u8, u16, u32, u64, u128, usize);

impl Float for f32 {}
impl Float for f64 {}

impl Ordered for char {}
impl Ordered for bool {}
impl Ordered for str {}
impl Ordered for String {}
impl<T: Ordered + ?Sized> Ordered for &T {}
