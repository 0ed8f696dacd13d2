use crate::{sequencer::SequencerState, types::VecIndex, vector::Vector};

/// Everything an observer learns after one vector has been built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationStep {
    pub index: VecIndex,
    pub total: usize,
    pub vector: Vector,
    pub x: SequencerState,
    pub y: SequencerState,
}

impl GenerationStep {
    /// `true` if either axis is inside a correction window.
    pub fn is_correcting(&self) -> bool {
        self.x.is_correcting() || self.y.is_correcting()
    }
}

/// Receives a [`GenerationStep`] after every vector of a run.
///
/// Observers only see snapshots; they cannot influence generation.
pub trait StepObserver {
    fn on_vector(&mut self, step: &GenerationStep);
}

/// Observer that ignores every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    #[inline]
    fn on_vector(&mut self, _step: &GenerationStep) {}
}

impl<F> StepObserver for F
where
    F: FnMut(&GenerationStep),
{
    fn on_vector(&mut self, step: &GenerationStep) {
        self(step)
    }
}
