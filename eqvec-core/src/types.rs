use std::fmt;

/// Signed value of one vector component along a single axis.
pub type Component = i32;

/// Position of a vector within an [`crate::generator::EquilibriumSet`].
///
/// Indices run from `0` to `total - 1`; the sequencers use them to detect
/// the last three steps of a run.
pub type VecIndex = usize;

/// The axis a [`crate::sequencer::ComponentSequencer`] generates for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Axis generated first for the vector at `index`.
    ///
    /// Even indices start with X and odd ones with Y, so that the
    /// zero-component re-draw does not always land on the same axis.
    pub fn first_for(index: VecIndex) -> Self {
        if index % 2 == 0 { Axis::X } else { Axis::Y }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}
