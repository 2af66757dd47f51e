//! Shuffle and sampling primitives.
//!
//! All randomness in studydrill flows through these helpers, with the RNG
//! injected by the caller so tests can seed a [`rand::rngs::StdRng`] and get
//! reproducible batches.

use rand::Rng;

/// Fisher–Yates shuffle. Every permutation of `items` is equally likely.
pub fn fisher_yates<T>(items: &mut [T], rng: &mut impl Rng) {
    let len = items.len();
    for i in (1..len).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Uniform sample of `n` distinct strings from `pool`, without replacement.
///
/// Duplicate pool entries count once. Returns `None` when the deduplicated
/// pool holds fewer than `n` values.
pub fn sample_distinct(pool: &[String], n: usize, rng: &mut impl Rng) -> Option<Vec<String>> {
    let mut distinct: Vec<String> = Vec::new();
    for value in pool {
        if !distinct.contains(value) {
            distinct.push(value.clone());
        }
    }
    if distinct.len() < n {
        return None;
    }
    fisher_yates(&mut distinct, rng);
    distinct.truncate(n);
    Some(distinct)
}
