//! Histogram command implementation
//!
//! Counts signed draws in `[min, max)` and prints `value count` lines.

use randshow_core::traits::{SeedableEngine, UniformRng};
use std::collections::BTreeMap;
use std::io::Write;
use tracing::info;

use super::{dispatch, EngineTask};
use crate::config::CliConfig;
use crate::{CliError, Result};

struct Histogram {
    min: i64,
    max: i64,
    draws: u64,
}

impl EngineTask for Histogram {
    type Output = BTreeMap<i64, u64>;

    fn run<R: SeedableEngine>(self, mut rng: R) -> Result<Self::Output> {
        let mut counts = BTreeMap::new();
        for _ in 0..self.draws {
            *counts.entry(rng.next_i64_in(self.min, self.max)).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

/// Run the histogram command
pub fn run<W: Write>(config: &CliConfig, min: i64, max: i64, draws: u64, out: &mut W) -> Result<()> {
    if min >= max {
        return Err(CliError::InvalidArgument(format!(
            "min ({}) must be below max ({})",
            min, max
        )));
    }

    info!(engine = %config.engine, min, max, draws, "Building histogram");
    let counts = dispatch(config.engine, config.seed, Histogram { min, max, draws })?;

    for (value, count) in &counts {
        writeln!(out, "{} {}", value, count)?;
    }
    Ok(())
}
