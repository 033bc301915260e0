//! # randshow_engines: Concrete Uniform Generators
//!
//! Five independent implementations of
//! [`UniformRng`](randshow_core::traits::UniformRng), each owning its own
//! state shape:
//!
//! | Engine | Output | State | Notes |
//! |---|---|---|---|
//! | [`Lcg`] | `u64` in `[0, m)` | 64 bits + 3 constants | Fastest, weakest; game logic only |
//! | [`Pcg32`] | `u32` | 64 bits | Good quality, very fast |
//! | [`Pcg64`] | `u64` | 128 bits | Longer period for high-throughput use |
//! | [`SplitMix64`] | `u64` | 64 bits | Seed expander for [`Xoshiro256PlusPlus`] |
//! | [`Xoshiro256PlusPlus`] | `u64` | 256 bits | Recommended default |
//!
//! None of these generators is cryptographically secure.
//!
//! ## Seeding
//!
//! Every engine offers `from_seed` for reproducible sequences and
//! `from_entropy` for a seed read once from the operating system. Entropy
//! failures are returned, never papered over with a fixed seed. The seed drawn
//! by `from_entropy` is logged at `debug` level so that a run can be replayed.
//!
//! ## Interop
//!
//! All engines implement [`rand_core::RngCore`], so they can drive `rand`
//! distributions and slice helpers directly.
//!
//! ## Usage Example
//!
//! ```rust
//! use randshow_core::traits::UniformRng;
//! use randshow_engines::{Pcg32, Xoshiro256PlusPlus};
//!
//! let mut a = Xoshiro256PlusPlus::from_seed(42);
//! let mut b = Xoshiro256PlusPlus::from_seed(42);
//! assert_eq!(a.next(), b.next());
//!
//! let mut pcg = Pcg32::from_seed(7);
//! let die = pcg.next_in(1, 7);
//! assert!((1..7).contains(&die));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod lcg;
mod pcg32;
mod pcg64;
mod splitmix64;
mod xoshiro;

pub use lcg::{Lcg, LCG_INCREMENT, LCG_MODULUS, LCG_MULTIPLIER};
pub use pcg32::{Pcg32, PCG32_INCREMENT, PCG32_MULTIPLIER};
pub use pcg64::{Pcg64, PCG64_INCREMENT, PCG64_MULTIPLIER};
pub use splitmix64::SplitMix64;
pub use xoshiro::Xoshiro256PlusPlus;

use randshow_core::types::EntropyError;

/// The engine recommended for general use.
pub type DefaultEngine = Xoshiro256PlusPlus;

/// Builds a fresh, entropy-seeded [`DefaultEngine`].
///
/// There is no process-wide generator: the caller owns the returned instance
/// and must not share it between threads without its own locking.
pub fn default_engine() -> Result<DefaultEngine, EntropyError> {
    DefaultEngine::from_entropy()
}
