//! Top-level run for one backend.
//!
//! `init → for each size: {generate → time kernels → average → report} → close`

use std::fs::File;
use std::io::{BufWriter, Write};

use log::info;
use rand::Rng;

use crate::backend::Backend;
use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::generator::time_seeded_rng;
use crate::harness::{self, Stopwatch, WallClock};
use crate::report::write_report;

/// Runs every configured size for `B` and writes the results file.
///
/// The file is created (or truncated) before any work starts and flushed
/// before returning, so a successful return means every block is on disk.
pub fn run<B: Backend>(config: &BenchConfig) -> Result<()> {
    config.validate()?;

    let file = File::create(&config.output).map_err(|source| BenchError::OutputFile {
        path: config.output.clone(),
        source,
    })?;

    info!(
        "{}: writing results to {}",
        B::LABEL,
        config.output.display()
    );

    let mut out = BufWriter::new(file);
    let mut rng = time_seeded_rng();

    run_with::<B, _, _, _>(config, &mut out, &mut rng, &mut WallClock)?;

    out.flush()?;

    Ok(())
}

/// Same loop as [`run`], over any writer, generator and stopwatch.
///
/// `config.output` is ignored.
pub fn run_with<B, W, R, S>(
    config: &BenchConfig,
    out: &mut W,
    rng: &mut R,
    stopwatch: &mut S,
) -> Result<()>
where
    B: Backend,
    W: Write,
    R: Rng,
    S: Stopwatch,
{
    config.validate()?;

    for &count in &config.sizes {
        let result = harness::measure::<B, _, _>(count, config.iterations, rng, stopwatch)?;
        write_report(out, &result)?;

        info!(
            "{}: {count} values x {} iterations done",
            B::LABEL,
            config.iterations
        );
    }

    Ok(())
}
