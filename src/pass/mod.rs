//! Password generation.

pub mod charset;
mod generate;

pub use generate::Generator;
pub use generate::generate;
