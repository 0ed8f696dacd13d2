use eqvec_core::{GenerationStep, StepObserver};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Installs the global `fmt` subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` with `--debug`
/// and `info` without.
pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Logs the sequencer state after every generated vector.
///
/// Vectors built while either axis is correcting are tagged
/// `correcting = true` and counted.
#[derive(Debug, Default)]
pub struct TracingObserver {
    corrected: usize,
}

impl TracingObserver {
    /// Number of vectors built inside a correction window.
    pub fn corrected(&self) -> usize {
        self.corrected
    }
}

impl StepObserver for TracingObserver {
    fn on_vector(&mut self, step: &GenerationStep) {
        let correcting = step.is_correcting();
        if correcting {
            self.corrected += 1;
        }
        debug!(
            vector = step.index + 1,
            total = step.total,
            dx = step.x.running_delta,
            cx = step.x.correction_countdown,
            dy = step.y.running_delta,
            cy = step.y.correction_countdown,
            correcting,
            "done with vector"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eqvec_core::{Config, generate_with_observer};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn counts_vectors_built_while_correcting() {
        let cfg = Config {
            component_min: 1,
            component_max: 10,
            ..Config::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        let mut expected = 0;
        let mut observer = TracingObserver::default();

        let mut both = |step: &GenerationStep| {
            if step.is_correcting() {
                expected += 1;
            }
            observer.on_vector(step);
        };
        generate_with_observer(500, &cfg, &mut rng, &mut both).unwrap();

        assert_eq!(observer.corrected(), expected);
        assert!(expected < 500);
    }
}
