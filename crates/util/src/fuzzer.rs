use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A fuzzer for generating random test data.
///
/// Uses the xoshiro256** PRNG for reproducible random sequences when seeded.
///
/// # Examples
///
/// ```
/// use dsa_util::Fuzzer;
///
/// // Create a fuzzer with a random seed
/// let fuzzer = Fuzzer::new(None);
///
/// // Generate random integers
/// let n = fuzzer.random_int(1, 10);
/// assert!(n >= 1 && n <= 10);
///
/// // Random byte blobs of length 0..=16
/// let blob = fuzzer.random_blob(16);
/// assert!(blob.len() <= 16);
/// ```
#[derive(Clone)]
pub struct Fuzzer {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Arc<Mutex<Xoshiro256StarStar>>,
}

impl Fuzzer {
    /// Create a new fuzzer with an optional seed.
    ///
    /// If no seed is provided, a random seed will be generated using `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        let rng = Xoshiro256StarStar::from_seed(seed);

        Self {
            seed,
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    // The PRNG state stays usable even if a panicking test poisoned the lock.
    fn rng(&self) -> MutexGuard<'_, Xoshiro256StarStar> {
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Generate a random integer in the range [min, max] (inclusive).
    pub fn random_int(&self, min: i64, max: i64) -> i64 {
        self.rng().gen_range(min..=max)
    }

    /// Pick a random element from a non-empty slice.
    pub fn pick<'a, T>(&self, elements: &'a [T]) -> &'a T {
        let idx = self.rng().gen_range(0..elements.len());
        &elements[idx]
    }

    /// Repeat a callback `times` times and collect results.
    pub fn repeat<T, F>(&self, times: usize, mut callback: F) -> Vec<T>
    where
        F: FnMut() -> T,
    {
        (0..times).map(|_| callback()).collect()
    }

    /// Generate a random byte array of the specified length.
    pub fn random_bytes(&self, len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        self.rng().fill_bytes(&mut bytes);
        bytes
    }

    /// Generate random bytes with a random length in `0..=max_len`.
    pub fn random_blob(&self, max_len: usize) -> Vec<u8> {
        let len = self.rng().gen_range(0..=max_len);
        self.random_bytes(len)
    }

    /// Generate `len` integers, each in [min, max] (inclusive).
    pub fn random_vec(&self, len: usize, min: i64, max: i64) -> Vec<i64> {
        let mut rng = self.rng();
        (0..len).map(|_| rng.gen_range(min..=max)).collect()
    }

    /// Generate a random string of the specified length from the given characters.
    pub fn random_string(&self, len: usize, chars: &str) -> String {
        let chars: Vec<char> = chars.chars().collect();
        let mut rng = self.rng();
        (0..len)
            .map(|_| chars[rng.gen_range(0..chars.len())])
            .collect()
    }
}
