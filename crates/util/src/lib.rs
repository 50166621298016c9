//! dsa-util - Test data generation for the algorithm crates
//!
//! Provides a seedable [`Fuzzer`] so randomized tests can print their seed
//! and be replayed deterministically.

pub mod fuzzer;

pub use fuzzer::Fuzzer;
