//! Errors raised while checking a policy.

/// Why a [`Policy`](crate::Policy) was rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    /// A length field held a negative value.
    #[error("lengths must not be negative ({field} = {value})")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The value it held.
        value: i32,
    },
    /// The effective minimum length does not fit under the maximum.
    ///
    /// Widened to `u64` so the sum of four `i32` minimums cannot overflow.
    #[error("minimum exceeds maximum ({minimum} > {maximum})")]
    MinimumExceedsMaximum {
        /// Larger of `min_length` and the sum of the class minimums.
        minimum: u64,
        /// The policy's `max_length`.
        maximum: u64,
    },
}

/// Errors produced by password generation.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The policy cannot be satisfied as written
    #[error("invalid policy: {0}")]
    InvalidPolicy(#[from] Reason),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
