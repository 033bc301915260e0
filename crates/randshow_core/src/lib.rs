//! # randshow_core: Foundation Layer of the Randshow Toolkit
//!
//! ## Role
//!
//! randshow_core is the bottom layer of the workspace and provides:
//! - Fixed-width bit rotation primitives (`bits`)
//! - The uniform generator contract and its derived draws (`traits`)
//! - Operating-system entropy for default seeding (`entropy`)
//! - Error types: `EntropyError`, `EngineError`, `DistributionError` (`types::error`)
//!
//! ## Dependency Principle
//!
//! This crate has no dependencies on other randshow_* crates. Concrete
//! generators live in `randshow_engines`; shuffling, sampling and discrete
//! distributions live in `randshow_sampling`.
//!
//! ## Usage Examples
//!
//! ```rust
//! use randshow_core::traits::UniformRng;
//!
//! /// A toy counter generator, enough to exercise the derived draws.
//! struct Counter(u32);
//!
//! impl UniformRng for Counter {
//!     type Output = u32;
//!
//!     fn advance(&mut self) -> u32 {
//!         self.0 = self.0.wrapping_add(0x9E37_79B9);
//!         self.0
//!     }
//! }
//!
//! let mut rng = Counter(7);
//! assert!(rng.next_below(10) < 10);
//! assert_eq!(rng.next_in(5, 5), 5);
//!
//! let u = rng.next_real();
//! assert!(u > 0.0 && u < 1.0);
//! ```
//!
//! ## Concurrency
//!
//! Every draw takes the generator by `&mut self`. A generator instance is
//! never synchronised; share it across threads only behind external locking,
//! or give each thread its own instance.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bits;
pub mod entropy;
pub mod traits;
pub mod types;
