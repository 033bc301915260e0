//! Dump command implementation
//!
//! Streams raw engine output as little-endian words of the engine's native
//! width, for external statistical test batteries.

use num_traits::AsPrimitive;
use randshow_core::traits::{SeedableEngine, UniformRng, Word};
use std::io::{ErrorKind, Write};
use tracing::{debug, info};

use super::{dispatch, EngineTask};
use crate::config::CliConfig;
use crate::Result;

struct Dump<'a, W: Write> {
    count: Option<u64>,
    out: &'a mut W,
}

impl<W: Write> EngineTask for Dump<'_, W> {
    type Output = u64;

    fn run<R: SeedableEngine>(self, mut rng: R) -> Result<u64> {
        let width = (<R::Output as Word>::WIDTH / 8) as usize;
        let mut written = 0u64;

        while self.count.map_or(true, |count| written < count) {
            let word: u64 = rng.advance().as_();
            match self.out.write_all(&word.to_le_bytes()[..width]) {
                Ok(()) => written += 1,
                Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                    debug!(written, "Output closed by reader");
                    return Ok(written);
                }
                Err(e) => return Err(e.into()),
            }
        }

        match self.out.flush() {
            Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(e.into()),
            _ => Ok(written),
        }
    }
}

/// Run the dump command
///
/// Writes `count` words, or words until the reader closes the stream when
/// `count` is `None`. Returns the number of words written.
pub fn run<W: Write>(config: &CliConfig, count: Option<u64>, out: &mut W) -> Result<u64> {
    info!(engine = %config.engine, ?count, "Dumping raw output");
    dispatch(config.engine, config.seed, Dump { count, out })
}
