//! # randshow_sampling: Algorithms over Uniform Generators
//!
//! Everything in this crate is written against
//! [`UniformRng`](randshow_core::traits::UniformRng) alone and works with any
//! engine, including `rand` generators wrapped in
//! [`RandAdapter`](randshow_core::traits::RandAdapter).
//!
//! - [`seq`]: Fisher-Yates shuffle, reservoir sampling (Algorithm L) and
//!   sampling with replacement
//! - [`distributions`]: Zipf and Benford discrete distributions via
//!   inverse-CDF search
//!
//! Generators are borrowed mutably for the duration of one call and never
//! stored. Distributions are immutable after construction and can be shared
//! between threads, as long as every thread draws with its own generator.
//!
//! ## Usage Example
//!
//! ```rust
//! use randshow_engines::Pcg32;
//! use randshow_sampling::distributions::Zipf;
//! use randshow_sampling::seq::{sample, shuffle};
//!
//! let mut rng = Pcg32::from_seed(2024);
//!
//! let mut cards: Vec<u32> = (1..=52).collect();
//! shuffle(&mut rng, &mut cards);
//!
//! let hand = sample(&mut rng, &cards, 5);
//! assert_eq!(hand.len(), 5);
//!
//! let words = Zipf::new(1_000, 1.1).unwrap();
//! let rank = words.draw(&mut rng);
//! assert!((1..=1_000).contains(&rank));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distributions;
pub mod seq;
