//! Discrete distributions over a uniform generator.
//!
//! Both distributions draw one `next_real()` value `z` in `(0, 1)` and walk
//! the cumulative distribution from the first outcome until it reaches `z`
//! (inverse-CDF search). The normalisation constant is computed once, at
//! construction.
//!
//! Walking past the last outcome means the normalisation and the summation
//! have drifted apart. That is an internal defect, not an input error, and it
//! panics rather than returning a made-up outcome.
//!
//! Both types implement `rand::distributions::Distribution`, so they can also
//! be sampled with any `rand` generator.

mod benford;
mod zipf;

pub use benford::Benford;
pub use zipf::Zipf;
