//! Zipf command implementation
//!
//! Draws ranks from a Zipf distribution and prints observed against expected
//! frequencies for the leading ranks.

use randshow_core::traits::SeedableEngine;
use randshow_sampling::distributions::Zipf;
use std::collections::BTreeMap;
use std::io::Write;
use tracing::info;

use super::{dispatch, EngineTask};
use crate::config::CliConfig;
use crate::{CliError, Result};

struct ZipfDraws<'a> {
    zipf: &'a Zipf,
    draws: u64,
}

impl EngineTask for ZipfDraws<'_> {
    type Output = BTreeMap<u64, u64>;

    fn run<R: SeedableEngine>(self, mut rng: R) -> Result<Self::Output> {
        let mut counts = BTreeMap::new();
        for _ in 0..self.draws {
            *counts.entry(self.zipf.draw(&mut rng)).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

/// Run the zipf command
///
/// Prints `rank observed expected` for ranks `1..=min(top, population)`.
pub fn run<W: Write>(
    config: &CliConfig,
    population: u64,
    exponent: f64,
    draws: u64,
    top: u64,
    out: &mut W,
) -> Result<()> {
    if draws == 0 {
        return Err(CliError::InvalidArgument("draws must be positive".to_string()));
    }
    let zipf = Zipf::new(population, exponent)?;
    info!(
        engine = %config.engine,
        population,
        exponent,
        draws,
        normalisation = zipf.normalisation(),
        "Sampling Zipf distribution"
    );

    let counts = dispatch(config.engine, config.seed, ZipfDraws { zipf: &zipf, draws })?;

    writeln!(out, "rank observed expected")?;
    for rank in 1..=top.min(population) {
        let observed = counts.get(&rank).copied().unwrap_or(0) as f64 / draws as f64;
        writeln!(out, "{} {:.6} {:.6}", rank, observed, zipf.probability(rank))?;
    }
    Ok(())
}
