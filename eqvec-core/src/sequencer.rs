//! Per-axis component generation.
//!
//! A [`ComponentSequencer`] emits one signed component per call and keeps a
//! running delta (the sum of everything emitted so far on its axis). Two
//! states drive the draw range:
//!
//! - **free** (`correction_countdown == 0`): magnitudes come from
//!   `[component_min, component_max)`, narrowed so the delta never leaves
//!   `[-2 * component_max, 2 * component_max]`. The sign flips every step.
//! - **correcting** (`correction_countdown > 0`): the sign points toward
//!   zero and the range is narrowed so that, when the countdown ends, the
//!   delta is back within `component_max`.
//!
//! The last index always emits `-running_delta`, which is what makes the
//! per-axis sum exactly zero.

use crate::{
    config::Config,
    error::GenError,
    types::{Axis, Component, VecIndex},
};
use rand::Rng;

/// Snapshot of a sequencer, handed to observers after each vector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequencerState {
    pub running_delta: Component,
    pub correction_countdown: u32,
}

impl SequencerState {
    #[inline]
    pub fn is_correcting(&self) -> bool {
        self.correction_countdown > 0
    }
}

/// Generation state for one axis of one run.
///
/// A sequencer is owned by a single generation run; parallel runs each
/// create their own pair.
#[derive(Clone, Debug)]
pub struct ComponentSequencer {
    axis: Axis,
    running_delta: Component,
    sign: Component,
    correction_countdown: u32,
}

impl ComponentSequencer {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            running_delta: 0,
            sign: 1,
            correction_countdown: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_state(
        axis: Axis,
        running_delta: Component,
        correction_countdown: u32,
    ) -> Self {
        Self {
            axis,
            running_delta,
            sign: 1,
            correction_countdown,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn state(&self) -> SequencerState {
        SequencerState {
            running_delta: self.running_delta,
            correction_countdown: self.correction_countdown,
        }
    }

    #[inline]
    pub fn is_correcting(&self) -> bool {
        self.correction_countdown > 0
    }

    /// Emits the component for vector `index` of a set of `total` vectors.
    ///
    /// On the last index the component is forced to `-running_delta`. On the
    /// penultimate index the draw is repeated until the delta is non-zero and
    /// within the range ceiling, so the final forced component is non-zero.
    ///
    /// ### Parameters
    /// - `index` - Position of the vector being built.
    /// - `total` - Size of the set; must be at least 2 (checked in debug builds).
    /// - `cfg` - Validated bounds.
    /// - `rng` - Source of uniform magnitudes.
    ///
    /// ### Errors
    /// [`GenError::RedrawLimit`] if the penultimate guard exhausts
    /// `cfg.max_redraws` attempts.
    pub fn next_component<R>(
        &mut self,
        index: VecIndex,
        total: usize,
        cfg: &Config,
        rng: &mut R,
    ) -> Result<Component, GenError>
    where
        R: Rng + ?Sized,
    {
        debug_assert!(total >= 2 && index < total, "index {index} of {total}");
        if index + 1 == total {
            let component = -self.running_delta;
            self.running_delta += component;
            self.correction_countdown = 0;
            return Ok(component);
        }

        let penultimate = index + 2 == total;
        if (self.is_correcting() || penultimate) && self.running_delta != 0 {
            self.sign = -self.running_delta.signum();
        }

        let (lo, hi) = self.draw_range(cfg);
        let mut attempts = 0;
        let component = loop {
            let component = self.sign * draw_magnitude(lo, hi, rng);
            if !penultimate || self.keeps_tail_open(component, hi) {
                break component;
            }
            attempts += 1;
            if attempts >= cfg.max_redraws {
                return Err(GenError::RedrawLimit {
                    index,
                    axis: self.axis,
                    attempts,
                });
            }
        };

        self.commit(index, total, component, cfg);
        Ok(component)
    }

    /// Magnitude range `(lo, hi)` for the next draw; `lo == hi` means forced.
    fn draw_range(&self, cfg: &Config) -> (Component, Component) {
        let (min, max) = (cfg.component_min(), cfg.component_max());
        let ad = self.running_delta.abs();
        let free_hi = if ad >= max { 2 * max - ad } else { max };
        if !self.is_correcting() {
            return (min, free_hi);
        }

        let countdown = self.correction_countdown as Component;
        let mut lo = min;
        // Within bounds already: leave at least one unit per remaining step
        // so the delta is not cancelled before the window closes.
        let hi = if ad <= max { ad - (countdown - 1) } else { max };
        if countdown == 2 && ad > hi {
            lo = (ad - hi).max(min);
        }
        if ad <= max && hi < lo {
            return (min, free_hi);
        }
        (lo, hi)
    }

    /// Penultimate-step check: the delta must stay non-zero and within `hi`.
    fn keeps_tail_open(&self, component: Component, hi: Component) -> bool {
        component != -self.running_delta && (self.running_delta + component).abs() <= hi
    }

    /// Applies `component` and runs the free/correcting transition.
    fn commit(&mut self, index: VecIndex, total: usize, component: Component, cfg: &Config) {
        self.running_delta += component;
        let ad = self.running_delta.abs();

        let third_to_last = index + 3 == total;
        if !self.is_correcting()
            && (ad > cfg.max_abs_delta() || (third_to_last && ad > cfg.component_max()))
        {
            self.correction_countdown = correction_window(index, total);
            self.sign = if self.running_delta < 0 { 1 } else { -1 };
        } else if self.is_correcting() {
            self.correction_countdown -= 1;
        }

        if !self.is_correcting() {
            self.sign = -self.sign;
        }
    }
}

/// Length of a correction window opened after vector `index`.
///
/// Two steps, stretched to three when needed so the window closes on an
/// index with the same parity as the last one.
fn correction_window(index: VecIndex, total: usize) -> u32 {
    if index % 2 == (total - 1) % 2 { 2 } else { 3 }
}

fn draw_magnitude<R>(lo: Component, hi: Component, rng: &mut R) -> Component
where
    R: Rng + ?Sized,
{
    if hi <= lo {
        lo
    } else {
        rng.random_range(lo..hi)
    }
}
