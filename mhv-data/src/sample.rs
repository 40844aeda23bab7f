//! Random sampling without replacement.

use mhv_core::{HousingError, Listing};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

/// Build the RNG for a sampling run. `None` draws a fresh seed from the OS.
pub fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Pick `n` distinct rows at random. The result is in shuffled order.
///
/// Fails when `n` exceeds the number of rows available.
pub fn sample_listings(
    rows: &[Listing],
    n: usize,
    seed: Option<u64>,
) -> Result<Vec<Listing>, HousingError> {
    if n > rows.len() {
        return Err(HousingError::SampleTooLarge {
            requested: n,
            available: rows.len(),
        });
    }

    let mut rng = rng_for(seed);
    let picks = index::sample(&mut rng, rows.len(), n);
    Ok(picks.into_iter().map(|i| rows[i].clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Listing> {
        (0..n).map(|i| Listing::new(i as f64, 1.0)).collect()
    }

    #[test]
    fn test_sample_size_and_uniqueness() {
        let sampled = sample_listings(&rows(50), 20, None).unwrap();
        assert_eq!(sampled.len(), 20);
        let mut prices: Vec<i64> = sampled.iter().map(|l| l.price as i64).collect();
        prices.sort_unstable();
        prices.dedup();
        assert_eq!(prices.len(), 20);
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let a = sample_listings(&rows(100), 10, Some(42)).unwrap();
        let b = sample_listings(&rows(100), 10, Some(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_sample_is_a_permutation() {
        let sampled = sample_listings(&rows(30), 30, Some(7)).unwrap();
        let mut prices: Vec<i64> = sampled.iter().map(|l| l.price as i64).collect();
        prices.sort_unstable();
        assert_eq!(prices, (0..30).collect::<Vec<i64>>());
    }

    #[test]
    fn test_oversized_sample_fails() {
        let err = sample_listings(&rows(5), 6, None).unwrap_err();
        assert!(matches!(
            err,
            HousingError::SampleTooLarge {
                requested: 6,
                available: 5
            }
        ));
    }

    #[test]
    fn test_empty_sample() {
        assert!(sample_listings(&rows(3), 0, None).unwrap().is_empty());
    }
}
