//! Random index selection and shuffling over a caller-owned RNG.
//!
//! Nothing here holds random state. Every function borrows the generator it
//! draws from, so the caller decides how it is seeded and shared: seeded once
//! and owned by a [`Generator`](crate::Generator), or thread-local through
//! [`rand::rng`].

use rand::Rng;

// =============================================================================
// Index
// =============================================================================

/// A uniformly distributed index in `min..max`.
///
/// # Panics
///
/// Panics if `max <= min`.
#[inline]
pub fn random_index<R>(rng: &mut R, min: usize, max: usize) -> usize
where
    R: Rng + ?Sized,
{
    rng.random_range(min..max)
}

// =============================================================================
// Shuffle
// =============================================================================

/// Fisher–Yates shuffle, in place.
#[inline]
pub fn shuffle<R>(rng: &mut R, chars: &mut [u8])
where
    R: Rng + ?Sized,
{
    for i in (1..chars.len()).rev() {
        let j = random_index(rng, 0, i + 1);
        chars.swap(i, j);
    }
}

/// `length` characters drawn independently and uniformly from `pool`.
///
/// The pool is reshuffled in place before every draw, so it is left in a
/// random order afterwards.
///
/// # Panics
///
/// Panics if `pool` is empty and `length` is not zero.
pub fn create_random<R>(rng: &mut R, pool: &mut [u8], length: usize) -> Vec<u8>
where
    R: Rng + ?Sized,
{
    let mut filled = Vec::with_capacity(length);
    for _ in 0..length {
        shuffle(rng, pool);
        filled.push(pool[random_index(rng, 0, pool.len())]);
    }
    filled
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    // Every draw lands inside the half-open range.
    proptest! {
        #[test]
        fn index_within_range(seed in any::<u64>(), min in 0usize..1_000, width in 1usize..1_000) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let max = min + width;
            for _ in 0..64 {
                let idx = random_index(&mut rng, min, max);
                prop_assert!(idx >= min && idx < max);
            }
        }
    }

    // A shuffle only reorders; the multiset of bytes is unchanged.
    proptest! {
        #[test]
        fn shuffle_is_permutation(seed: u64, chars: Vec<u8>) {
            let mut chars = chars;
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut before = chars.clone();
            shuffle(&mut rng, &mut chars);
            before.sort_unstable();
            chars.sort_unstable();
            prop_assert_eq!(before, chars);
        }
    }

    // Drawn characters always come from the pool, and the pool itself is only
    // ever reordered.
    proptest! {
        #[test]
        fn create_random_draws_from_pool(seed in any::<u64>(), length in 0usize..256) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut pool = b"abcdef!".to_vec();
            let drawn = create_random(&mut rng, &mut pool, length);
            prop_assert_eq!(drawn.len(), length);
            for b in &drawn {
                prop_assert!(b"abcdef!".contains(b));
            }
            pool.sort_unstable();
            prop_assert_eq!(pool, b"!abcdef".to_vec());
        }
    }

    #[test]
    fn zero_length_leaves_pool_alone() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut pool = b"ABCDEFGH".to_vec();
        assert!(create_random(&mut rng, &mut pool, 0).is_empty());
        assert_eq!(pool, b"ABCDEFGH");

        let mut empty: Vec<u8> = Vec::new();
        assert!(create_random(&mut rng, &mut empty, 0).is_empty());
    }

    #[test]
    fn short_sequences_survive_shuffle() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut none: [u8; 0] = [];
        shuffle(&mut rng, &mut none);
        let mut one = [b'x'];
        shuffle(&mut rng, &mut one);
        assert_eq!(one, [b'x']);
    }

    // Every position should be reachable by every element. 4 elements, 24
    // permutations, 24k shuffles: each permutation expected ~1000 times.
    #[test]
    fn shuffle_reaches_every_permutation_evenly() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let mut seen = std::collections::HashMap::new();
        for _ in 0..24_000 {
            let mut chars = *b"abcd";
            shuffle(&mut rng, &mut chars);
            *seen.entry(chars).or_insert(0u32) += 1;
        }
        assert_eq!(seen.len(), 24);
        for (perm, hits) in seen {
            assert!(
                (800..1200).contains(&hits),
                "{perm:?} hit {hits} times"
            );
        }
    }

    #[test]
    #[should_panic]
    fn empty_range_panics() {
        let mut rng = SmallRng::seed_from_u64(3);
        let _ = random_index(&mut rng, 5, 5);
    }
}
