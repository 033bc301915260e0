//! Uniformity command implementation
//!
//! Draws `range * per_bucket` values below `range` and checks that every
//! bucket count lies within `tolerance` (relative) of `per_bucket`.

use randshow_core::traits::{SeedableEngine, UniformRng};
use std::io::Write;
use tracing::{info, warn};

use super::{dispatch, EngineTask};
use crate::config::{CliConfig, EngineKind};
use crate::{CliError, Result};

/// Failing buckets logged individually per engine
const MAX_LOGGED_FAILURES: usize = 10;

/// Largest accepted bucket count
pub const MAX_RANGE: u64 = 1 << 24;

/// Outcome of the bucket check for one engine
#[derive(Debug, Clone, PartialEq)]
pub struct UniformityReport {
    /// Engine identifier
    pub engine: &'static str,
    /// Number of buckets
    pub buckets: u64,
    /// Buckets outside the tolerance band
    pub failed: usize,
    /// Largest relative deviation from the expected count
    pub max_deviation: f64,
}

impl UniformityReport {
    /// True when every bucket is inside the band
    pub fn passed(&self) -> bool {
        self.failed == 0
    }
}

struct BucketCounts {
    range: u64,
    draws: u64,
}

impl EngineTask for BucketCounts {
    type Output = Vec<u64>;

    fn run<R: SeedableEngine>(self, mut rng: R) -> Result<Vec<u64>> {
        let mut counts = vec![0u64; self.range as usize];
        for _ in 0..self.draws {
            counts[rng.next_u64_below(self.range) as usize] += 1;
        }
        Ok(counts)
    }
}

/// Total draws for the check, or an error when the arguments are unusable
fn total_draws(range: u64, per_bucket: u64) -> Result<u64> {
    if range == 0 || per_bucket == 0 {
        return Err(CliError::InvalidArgument(
            "range and per-bucket count must be positive".to_string(),
        ));
    }
    if range > MAX_RANGE {
        return Err(CliError::InvalidArgument(format!(
            "range must be at most {}, got {}",
            MAX_RANGE, range
        )));
    }
    range.checked_mul(per_bucket).ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "range ({}) times per-bucket count ({}) overflows",
            range, per_bucket
        ))
    })
}

/// Checks one engine and returns its report
pub fn check(
    engine: EngineKind,
    seed: Option<u64>,
    range: u64,
    per_bucket: u64,
    tolerance: f64,
) -> Result<UniformityReport> {
    let draws = total_draws(range, per_bucket)?;
    let counts = dispatch(engine, seed, BucketCounts { range, draws })?;

    let expected = per_bucket as f64;
    let mut failed = 0;
    let mut max_deviation = 0.0f64;
    for (bucket, &count) in counts.iter().enumerate() {
        let deviation = (count as f64 - expected).abs() / expected;
        max_deviation = max_deviation.max(deviation);
        if deviation > tolerance {
            failed += 1;
            if failed <= MAX_LOGGED_FAILURES {
                warn!(engine = %engine, bucket, count, expected, "Bucket outside tolerance");
            }
        }
    }

    Ok(UniformityReport {
        engine: engine.name(),
        buckets: range,
        failed,
        max_deviation,
    })
}

/// Run the uniformity command
///
/// Prints one `engine failed/buckets max_deviation` line per engine and fails
/// when any engine has a bucket outside the band.
pub fn run<W: Write>(
    config: &CliConfig,
    engines: &[EngineKind],
    range: u64,
    per_bucket: u64,
    tolerance: f64,
    out: &mut W,
) -> Result<Vec<UniformityReport>> {
    total_draws(range, per_bucket)?;
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "tolerance must be a positive fraction, got {}",
            tolerance
        )));
    }

    info!(range, per_bucket, tolerance, engines = engines.len(), "Checking uniformity");

    let mut reports = Vec::with_capacity(engines.len());
    for &engine in engines {
        let report = check(engine, config.seed, range, per_bucket, tolerance)?;
        writeln!(
            out,
            "{} {}/{} {:.4}",
            report.engine, report.failed, report.buckets, report.max_deviation
        )?;
        reports.push(report);
    }

    let failing: Vec<&UniformityReport> = reports.iter().filter(|r| !r.passed()).collect();
    if !failing.is_empty() {
        return Err(CliError::UniformityFailed {
            engine: failing
                .iter()
                .map(|r| r.engine)
                .collect::<Vec<_>>()
                .join(", "),
            failed: failing.iter().map(|r| r.failed).sum(),
        });
    }
    Ok(reports)
}
