//! Command-line entry point for the equilibrium vector generator.
//!
//! This binary resolves settings, installs logging, and delegates the
//! generation itself to [`eqvec_core`]. Vectors go to stdout; logs go to
//! stderr.

mod logging;
mod output;
mod settings;

use std::{io, path::PathBuf};

use anyhow::{Context, bail};
use clap::Parser;
use eqvec_core::generate_with_observer;
use glam::IVec2;
use logging::TracingObserver;
use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "eqvec", about = "Generate integer vector sets in equilibrium")]
struct Args {
    /// Number of vectors to generate (min 2)
    #[arg(short = 'n', long = "count", default_value_t = 2)]
    count: usize,
    /// Enable debug logging output
    #[arg(long)]
    debug: bool,
    /// Settings file; skipped if it does not exist
    #[arg(long, default_value = "params.toml")]
    config: PathBuf,
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Print the set as JSON
    #[arg(long)]
    json: bool,
}

/// Generates one set, prints it, and checks the component sums.
///
/// ### Returns
/// - `Ok(())` if the set was generated, written, and sums to zero.
/// - `Err` on invalid settings, an exhausted re-draw loop, an output
///   failure, or a non-zero component sum.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.debug);

    let cfg = settings::load_settings(&args.config);
    cfg.validate().context("invalid generation settings")?;
    debug!(?cfg, "resolved settings");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut observer = TracingObserver::default();
    let set = generate_with_observer(args.count, &cfg, &mut rng, &mut observer)
        .context("failed to generate vector set")?;
    debug!(corrected = observer.corrected(), "generation finished");

    let mut out = io::stdout().lock();
    if args.json {
        output::write_json(&mut out, &set)?;
    } else {
        output::write_text(&mut out, &set)?;
    }

    let sum = set.component_sum();
    debug!("i component sum: {}", sum.x);
    debug!("j component sum: {}", sum.y);
    if sum != IVec2::ZERO {
        bail!("vector set is not in equilibrium: sums ({}, {})", sum.x, sum.y);
    }
    debug!(vectors = set.len(), "generated equilibrium set");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_without_flags() {
        let args = Args::parse_from(["eqvec"]);
        assert_eq!(args.count, 2);
        assert!(!args.debug);
        assert!(!args.json);
        assert_eq!(args.seed, None);
        assert_eq!(args.config, PathBuf::from("params.toml"));
    }

    #[test]
    fn parses_short_count_and_seed() {
        let args = Args::parse_from(["eqvec", "-n", "12", "--seed", "7", "--debug"]);
        assert_eq!(args.count, 12);
        assert_eq!(args.seed, Some(7));
        assert!(args.debug);
    }
}
