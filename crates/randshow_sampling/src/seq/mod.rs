//! Sequence algorithms.
//!
//! - [`shuffle`]: uniform in-place permutation (Fisher-Yates)
//! - [`sample_iter`] / [`sample`]: uniform k-subset without replacement
//!   (reservoir sampling, Algorithm L)
//! - [`sample_with_replacement`]: k independent uniform picks

mod replacement;
mod reservoir;
mod shuffle;

pub use replacement::sample_with_replacement;
pub use reservoir::{sample, sample_iter};
pub use shuffle::shuffle;
