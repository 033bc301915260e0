//! Benford command implementation

use randshow_core::traits::SeedableEngine;
use randshow_sampling::distributions::Benford;
use std::io::Write;
use tracing::info;

use super::{dispatch, EngineTask};
use crate::config::CliConfig;
use crate::{CliError, Result};

struct BenfordDraws<'a> {
    benford: &'a Benford,
    draws: u64,
}

impl EngineTask for BenfordDraws<'_> {
    type Output = Vec<u64>;

    fn run<R: SeedableEngine>(self, mut rng: R) -> Result<Vec<u64>> {
        let mut counts = vec![0u64; self.benford.base() as usize + 1];
        for _ in 0..self.draws {
            counts[self.benford.draw(&mut rng) as usize] += 1;
        }
        Ok(counts)
    }
}

/// Run the benford command
///
/// Prints `digit observed expected` for every leading digit of `base`.
pub fn run<W: Write>(config: &CliConfig, base: u32, draws: u64, out: &mut W) -> Result<()> {
    if draws == 0 {
        return Err(CliError::InvalidArgument("draws must be positive".to_string()));
    }
    let benford = Benford::new(base)?;
    info!(engine = %config.engine, base, draws, "Sampling Benford distribution");

    let counts = dispatch(
        config.engine,
        config.seed,
        BenfordDraws {
            benford: &benford,
            draws,
        },
    )?;

    writeln!(out, "digit observed expected")?;
    for digit in 1..base {
        let observed = counts[digit as usize] as f64 / draws as f64;
        writeln!(out, "{} {:.6} {:.6}", digit, observed, benford.probability(digit))?;
    }
    Ok(())
}
