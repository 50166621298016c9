//! Small integer and statistics helpers.
//!
//! Every function is generic over the numeric constraints from
//! `dsa-constraints`, so the same routine serves `u8` and `i128` alike.
//!
//! # Example
//!
//! ```
//! use dsa_math::{gcd, lcm, mean, min};
//!
//! assert_eq!(gcd(12, -18), 6);
//! assert_eq!(lcm(4u8, 6).unwrap(), 12);
//! assert_eq!(mean(&[1, 2, 3, 4]), 2.5);
//! assert_eq!(min(&[7, -2, 5]), Some(-2));
//! ```

pub mod gcd;
pub mod lcm;
pub mod matrix;
pub mod mean;
pub mod min;
pub mod mobius;

use thiserror::Error;

pub use gcd::{gcd, gcd_recursive};
pub use lcm::lcm;
pub use matrix::is_valid;
pub use mean::mean;
pub use min::min;
pub use mobius::mu;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("arithmetic overflow")]
    Overflow,
}
