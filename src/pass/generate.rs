//! Password generation.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use super::charset::{self, CharClass};
use crate::error::Result;
use crate::policy::{Bounds, Policy};
use crate::random::{create_random, random_index, shuffle};

/// Working copies of the character pools, reshuffled in place on every draw.
#[derive(Debug, Clone)]
struct Pools {
    upper: [u8; charset::UPPERCASE.len()],
    lower: [u8; charset::LOWERCASE.len()],
    digits: [u8; charset::DIGITS.len()],
    special: [u8; charset::SPECIAL.len()],
    all: [u8; charset::ALL.len()],
}

impl Pools {
    fn new() -> Self {
        fn copy<const N: usize>(src: &[u8]) -> [u8; N] {
            let mut dst = [0u8; N];
            dst.copy_from_slice(src);
            dst
        }
        Self {
            upper: copy(charset::UPPERCASE),
            lower: copy(charset::LOWERCASE),
            digits: copy(charset::DIGITS),
            special: copy(charset::SPECIAL),
            all: copy(charset::ALL),
        }
    }

    fn class_mut(&mut self, class: CharClass) -> &mut [u8] {
        match class {
            CharClass::Upper => &mut self.upper,
            CharClass::Lower => &mut self.lower,
            CharClass::Digit => &mut self.digits,
            CharClass::Special => &mut self.special,
        }
    }
}

/// Password generator owning its random source.
///
/// The source is seeded once, when the generator is built. Generation takes
/// `&mut self`; give each thread its own generator, or use [`generate`] which
/// draws from a thread-local source.
#[derive(Debug, Clone)]
pub struct Generator<R = SmallRng> {
    rng: R,
    pools: Pools,
}

impl Generator<SmallRng> {
    /// A generator over a [`SmallRng`] seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_os_rng())
    }
}

impl Default for Generator<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Generator<R>
where
    R: Rng,
{
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            pools: Pools::new(),
        }
    }

    /// Generate one password satisfying `policy`.
    ///
    /// The length lies in `min..max_length`, where `min` is the larger of
    /// `min_length` and the sum of the class minimums. When `min` equals
    /// `max_length` the password is exactly `max_length` long.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPolicy`](crate::Error::InvalidPolicy) when the
    /// policy has a negative field or its minimum exceeds its maximum. No
    /// randomness is consumed in that case.
    pub fn generate(&mut self, policy: &Policy) -> Result<Zeroizing<String>> {
        let bounds = policy.validate()?;
        Ok(self.generate_bounded(&bounds))
    }

    /// Generate `count` passwords under one policy, validated once.
    ///
    /// # Errors
    ///
    /// Same as [`Generator::generate`]. Nothing is generated on error.
    pub fn generate_batch(
        &mut self,
        policy: &Policy,
        count: usize,
    ) -> Result<Vec<Zeroizing<String>>> {
        let bounds = policy.validate()?;
        trace!(count, "generating batch");
        Ok((0..count).map(|_| self.generate_bounded(&bounds)).collect())
    }

    fn generate_bounded(&mut self, bounds: &Bounds) -> Zeroizing<String> {
        if bounds.max_length == 0 {
            return Zeroizing::new(String::new());
        }

        let mut buf = Vec::with_capacity(bounds.max_length);
        for class in CharClass::ORDERED {
            let mut chunk = create_random(
                &mut self.rng,
                self.pools.class_mut(class),
                bounds.minimum(class),
            );
            buf.extend_from_slice(&chunk);
            chunk.zeroize();
        }

        let built = buf.len();
        let target = self.target_length(bounds, built);
        debug!(
            min_length = bounds.min_length,
            max_length = bounds.max_length,
            target,
            "generating password"
        );

        let mut padding = create_random(&mut self.rng, &mut self.pools.all, target - built);
        buf.extend_from_slice(&padding);
        padding.zeroize();

        shuffle(&mut self.rng, &mut buf);

        // Pools are ASCII, so each byte is one char and the capacity is exact.
        let mut pass = Zeroizing::new(String::with_capacity(buf.len()));
        pass.extend(buf.iter().copied().map(char::from));
        buf.zeroize();
        pass
    }

    /// Final password length. Draws from `min_length..max_length`; when that
    /// range is empty the class minimums already fill or the minimum pins the
    /// length, so `max_length` is used as is.
    fn target_length(&mut self, bounds: &Bounds, built: usize) -> usize {
        if built >= bounds.max_length || bounds.min_length >= bounds.max_length {
            return bounds.max_length;
        }
        random_index(&mut self.rng, bounds.min_length, bounds.max_length)
    }
}

/// Generate one password from the calling thread's random source.
///
/// # Errors
///
/// See [`Generator::generate`].
pub fn generate(policy: &Policy) -> Result<Zeroizing<String>> {
    let bounds = policy.validate()?;
    let mut generator = Generator::from_rng(rand::rng());
    Ok(generator.generate_bounded(&bounds))
}
