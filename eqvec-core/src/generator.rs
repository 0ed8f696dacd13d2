//! Assembly of equilibrium sets from the two per-axis sequencers.
//!
//! For every index the generator:
//! 1. Picks which axis goes first via [`Axis::first_for`].
//! 2. Draws that component; if it is zero, re-draws the other component
//!    until it is non-zero, otherwise draws the other component once.
//! 3. Builds the [`Vector`] (and its angle) and reports the step to the
//!    [`StepObserver`].
//!
//! The sequencers force the last vector to cancel both running deltas, so
//! the returned set always sums to zero.

use crate::{
    config::Config,
    error::GenError,
    observer::{GenerationStep, NoopObserver, StepObserver},
    sequencer::ComponentSequencer,
    types::{Axis, Component, VecIndex},
    vector::Vector,
};
use glam::IVec2;
use rand::Rng;
use serde::Serialize;
use tracing::warn;

/// Smallest set the generator produces; smaller requests are raised to it.
pub const MIN_SET_SIZE: usize = 2;

/// An ordered set of vectors whose X and Y components each sum to zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EquilibriumSet {
    vectors: Vec<Vector>,
}

impl EquilibriumSet {
    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector> {
        self.vectors.iter()
    }

    /// Component-wise sum of all vectors; `IVec2::ZERO` for a valid set.
    pub fn component_sum(&self) -> IVec2 {
        self.vectors
            .iter()
            .fold(IVec2::ZERO, |acc, v| acc + v.components())
    }
}

impl<'a> IntoIterator for &'a EquilibriumSet {
    type Item = &'a Vector;
    type IntoIter = std::slice::Iter<'a, Vector>;

    fn into_iter(self) -> Self::IntoIter {
        self.vectors.iter()
    }
}

/// Generates an equilibrium set of `n` vectors.
///
/// Shorthand for [`generate_with_observer`] with a [`NoopObserver`].
pub fn generate<R>(n: usize, cfg: &Config, rng: &mut R) -> Result<EquilibriumSet, GenError>
where
    R: Rng + ?Sized,
{
    generate_with_observer(n, cfg, rng, &mut NoopObserver)
}

/// Generates an equilibrium set of `n` vectors, reporting every step.
///
/// `n` below [`MIN_SET_SIZE`] is raised to it with a warning.
///
/// ### Parameters
/// - `n` - Requested number of vectors.
/// - `cfg` - Bounds; validated before the first draw.
/// - `rng` - Random source. A seeded RNG makes the output reproducible.
/// - `observer` - Called once per vector with the sequencer snapshots.
///
/// ### Errors
/// - Any [`Config::validate`] error.
/// - [`GenError::RedrawLimit`] if a re-draw loop runs out of attempts.
pub fn generate_with_observer<R, O>(
    n: usize,
    cfg: &Config,
    rng: &mut R,
    observer: &mut O,
) -> Result<EquilibriumSet, GenError>
where
    R: Rng + ?Sized,
    O: StepObserver + ?Sized,
{
    cfg.validate()?;

    let total = if n < MIN_SET_SIZE {
        warn!(requested = n, "invalid vector count, defaulting to {MIN_SET_SIZE}");
        MIN_SET_SIZE
    } else {
        n
    };

    let mut x_seq = ComponentSequencer::new(Axis::X);
    let mut y_seq = ComponentSequencer::new(Axis::Y);
    let mut vectors = Vec::with_capacity(total);

    for index in 0..total {
        let first_axis = Axis::first_for(index);
        let (first, second) = match first_axis {
            Axis::X => (&mut x_seq, &mut y_seq),
            Axis::Y => (&mut y_seq, &mut x_seq),
        };

        let a = first.next_component(index, total, cfg, rng)?;
        let b = if a == 0 {
            redraw_non_zero(second, index, total, cfg, rng)?
        } else {
            second.next_component(index, total, cfg, rng)?
        };
        let (x, y) = match first_axis {
            Axis::X => (a, b),
            Axis::Y => (b, a),
        };

        let vector = Vector::new(x, y);
        observer.on_vector(&GenerationStep {
            index,
            total,
            vector,
            x: x_seq.state(),
            y: y_seq.state(),
        });
        vectors.push(vector);
    }

    Ok(EquilibriumSet { vectors })
}

/// Draws from `seq` until the component is non-zero.
///
/// Every draw is a full sequencer step, so zero draws still advance the
/// sign and correction state.
fn redraw_non_zero<R>(
    seq: &mut ComponentSequencer,
    index: VecIndex,
    total: usize,
    cfg: &Config,
    rng: &mut R,
) -> Result<Component, GenError>
where
    R: Rng + ?Sized,
{
    let mut attempts = 0;
    loop {
        let component = seq.next_component(index, total, cfg, rng)?;
        if component != 0 {
            return Ok(component);
        }
        attempts += 1;
        if attempts >= cfg.max_redraws {
            return Err(GenError::RedrawLimit {
                index,
                axis: seq.axis(),
                attempts,
            });
        }
    }
}
