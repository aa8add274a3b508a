//! Random passwords that satisfy a composition policy.
//!
//! A [`Policy`] sets length bounds and minimum counts of uppercase letters,
//! lowercase letters, digits and special characters. [`generate`] produces a
//! password meeting it from a thread-local random source; a [`Generator`]
//! does the same from a random source it owns, seeded once.
//!
//! ```ignore
//! let policy = passgen::Policy {
//!     min_digits: 2,
//!     min_special: 1,
//!     ..passgen::Policy::new()
//! };
//! let password = passgen::generate(&policy)?;
//! ```
//!
//! The default [`Generator`] source is a fast, non-cryptographic RNG. Returned
//! passwords are wiped from memory when dropped.

pub mod error;
pub mod pass;
pub mod policy;
pub mod random;

pub use error::{Error, Reason, Result};
pub use pass::charset::{CharClass, Composition};
pub use pass::{Generator, generate};
pub use policy::{Bounds, Policy};
