//! Password composition policy.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Reason, Result};
use crate::pass::charset::{CharClass, Composition};

fn min_length() -> i32 {
    6
}

fn max_length() -> i32 {
    16
}

/// Length bounds and per-class minimums a generated password must meet.
///
/// Fields are plain integers so a policy can be built or deserialized freely.
/// Nothing is checked until generation, see [`Policy::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Policy {
    #[serde(default = "min_length")]
    pub min_length: i32,
    /// Exclusive upper bound on length, except when it equals the effective
    /// minimum. Zero asks for an empty password.
    #[serde(default = "max_length")]
    pub max_length: i32,
    #[serde(default)]
    pub min_upper: i32,
    #[serde(default)]
    pub min_lower: i32,
    #[serde(default)]
    pub min_digits: i32,
    #[serde(default)]
    pub min_special: i32,
}

impl Policy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the policy and resolve it into unsigned [`Bounds`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPolicy`] if any field is negative, or if the
    /// larger of `min_length` and the sum of the class minimums is greater
    /// than `max_length`.
    pub fn validate(&self) -> Result<Bounds> {
        let fields = [
            ("min_length", self.min_length),
            ("max_length", self.max_length),
            ("min_upper", self.min_upper),
            ("min_lower", self.min_lower),
            ("min_digits", self.min_digits),
            ("min_special", self.min_special),
        ];
        let mut checked = [0u32; 6];
        for (slot, (field, value)) in checked.iter_mut().zip(fields) {
            *slot = u32::try_from(value).map_err(|_| {
                let reason = Reason::Negative { field, value };
                debug!(%reason, "rejecting policy");
                reason
            })?;
        }
        let [min_length, max_length, min_upper, min_lower, min_digits, min_special] = checked;

        // Summed in u64: four i32::MAX minimums overflow a 32-bit usize.
        let class_total: u64 = [min_upper, min_lower, min_digits, min_special]
            .into_iter()
            .map(u64::from)
            .sum();
        let minimum = u64::from(min_length).max(class_total);
        let maximum = u64::from(max_length);
        if minimum > maximum {
            let reason = Reason::MinimumExceedsMaximum { minimum, maximum };
            debug!(%reason, "rejecting policy");
            return Err(reason.into());
        }

        // Every value is now at most max_length, an i32, so fits in usize.
        let widen = |n: u64| n as usize;
        Ok(Bounds {
            min_length: widen(minimum),
            max_length: widen(maximum),
            min_upper: widen(min_upper.into()),
            min_lower: widen(min_lower.into()),
            min_digits: widen(min_digits.into()),
            min_special: widen(min_special.into()),
        })
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            min_length: min_length(),
            max_length: max_length(),
            min_upper: 0,
            min_lower: 0,
            min_digits: 0,
            min_special: 0,
        }
    }
}

/// A [`Policy`] that passed validation.
///
/// `min_length` is the effective minimum: never below the sum of the class
/// minimums, never above `max_length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_length: usize,
    pub max_length: usize,
    pub min_upper: usize,
    pub min_lower: usize,
    pub min_digits: usize,
    pub min_special: usize,
}

impl Bounds {
    pub fn minimum(&self, class: CharClass) -> usize {
        match class {
            CharClass::Upper => self.min_upper,
            CharClass::Lower => self.min_lower,
            CharClass::Digit => self.min_digits,
            CharClass::Special => self.min_special,
        }
    }

    /// Sum of the four class minimums.
    pub fn class_total(&self) -> usize {
        CharClass::ORDERED
            .iter()
            .fold(0usize, |total, &class| total.saturating_add(self.minimum(class)))
    }

    /// Whether `password` could have been produced under these bounds.
    pub fn admits(&self, password: &str) -> bool {
        if self.max_length == 0 {
            return password.is_empty();
        }
        let counts = Composition::of(password);
        let len = password.chars().count();
        let len_ok = if self.min_length == self.max_length {
            len == self.max_length
        } else {
            (self.min_length..self.max_length).contains(&len)
        };
        len_ok
            && counts.other == 0
            && CharClass::ORDERED
                .iter()
                .all(|&class| counts.count(class) >= self.minimum(class))
    }
}
