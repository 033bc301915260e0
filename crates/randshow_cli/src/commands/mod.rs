//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! data to the supplied writer; diagnostics go through `tracing`.

pub mod benford;
pub mod dump;
pub mod histogram;
pub mod uniformity;
pub mod zipf;

use randshow_core::traits::SeedableEngine;
use randshow_engines::{Lcg, Pcg32, Pcg64, SplitMix64, Xoshiro256PlusPlus};
use tracing::info;

use crate::config::EngineKind;
use crate::Result;

/// Work that runs against any engine
///
/// Commands implement this once, generically, and [`dispatch`] picks the
/// concrete engine at runtime.
pub trait EngineTask {
    /// Value produced by the task
    type Output;

    /// Runs the task with a freshly built engine
    fn run<R: SeedableEngine>(self, rng: R) -> Result<Self::Output>;
}

/// Builds the engine named by `kind` and hands it to `task`
pub fn dispatch<T: EngineTask>(kind: EngineKind, seed: Option<u64>, task: T) -> Result<T::Output> {
    match kind {
        EngineKind::Lcg => task.run(build_engine::<Lcg>(seed)?),
        EngineKind::Pcg32 => task.run(build_engine::<Pcg32>(seed)?),
        EngineKind::Pcg64 => task.run(build_engine::<Pcg64>(seed)?),
        EngineKind::SplitMix64 => task.run(build_engine::<SplitMix64>(seed)?),
        EngineKind::Xoshiro256PlusPlus => task.run(build_engine::<Xoshiro256PlusPlus>(seed)?),
    }
}

/// Seeds an engine from `seed`, or from system entropy when absent
pub fn build_engine<R: SeedableEngine>(seed: Option<u64>) -> Result<R> {
    match seed {
        Some(seed) => {
            info!(engine = R::NAME, seed, "Using fixed seed");
            Ok(R::from_seed_u64(seed))
        }
        None => {
            info!(engine = R::NAME, "Seeding from system entropy");
            Ok(R::from_entropy()?)
        }
    }
}
