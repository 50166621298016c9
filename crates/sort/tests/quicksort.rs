//! Tests for randomized quicksort.

use dsa_sort::{quicksort, quicksort_by, quicksort_with_rng};
use dsa_util::Fuzzer;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

fn is_sorted<T: PartialOrd>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn works() {
    let fuzzer = Fuzzer::new(None);

    for _ in 0..100 {
        let len = fuzzer.random_int(0, 300) as usize;
        let mut arr = fuzzer.random_vec(len, -50, 50);
        let mut expected = arr.clone();
        expected.sort();

        quicksort(&mut arr);
        assert_eq!(arr, expected, "seed {:?}", fuzzer.seed);
    }
}

#[test]
fn boundaries() {
    let mut empty: Vec<i64> = vec![];
    quicksort(&mut empty);
    assert_eq!(empty, Vec::<i64>::new());

    let mut single = vec!["only"];
    quicksort(&mut single);
    assert_eq!(single, vec!["only"]);
}

#[test]
fn sorts_strings() {
    let fuzzer = Fuzzer::new(None);
    let mut words: Vec<String> = fuzzer.repeat(50, || fuzzer.random_string(3, "abc"));
    let mut expected = words.clone();
    expected.sort();

    quicksort(&mut words);
    assert_eq!(words, expected);
}

#[test]
fn seeded_rng_sorts() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(0xDEC0DE);
    let mut arr = vec![9u16, 4, 4, 0, 65535, 12, 4];
    quicksort_with_rng(&mut arr, &mut rng);
    assert_eq!(arr, vec![0, 4, 4, 4, 9, 12, 65535]);
}

#[test]
fn by_comparator() {
    let mut arr = vec![(1, "x"), (3, "y"), (2, "z")];
    quicksort_by(&mut arr, |a, b| b.0.cmp(&a.0));
    assert_eq!(arr, vec![(3, "y"), (2, "z"), (1, "x")]);
}

proptest! {
    #[test]
    fn sorted_permutation(mut arr in proptest::collection::vec(any::<i32>(), 0..200)) {
        let mut expected = arr.clone();
        expected.sort_unstable();
        quicksort(&mut arr);
        prop_assert!(is_sorted(&arr));
        prop_assert_eq!(arr, expected);
    }

    #[test]
    fn idempotent(mut arr in proptest::collection::vec(0u8..8, 0..200)) {
        quicksort(&mut arr);
        let once = arr.clone();
        quicksort(&mut arr);
        prop_assert_eq!(arr, once);
    }
}
