use crate::error::GenError;
use crate::types::Component;
use serde::{Deserialize, Serialize};

/// Largest accepted `component_max`; keeps `2 * component_max` well inside `i32`.
pub const COMPONENT_LIMIT: u32 = 1 << 24;

/// Bounds and retry policy consumed by the component sequencers.
///
/// Missing keys in a settings file fall back to [`Config::default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum absolute value of a freely drawn component.
    pub component_min: u32,
    /// Maximum absolute value of a freely drawn component.
    pub component_max: u32,
    /// Attempts allowed to each re-draw loop before giving up.
    pub max_redraws: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            component_min: 1,
            component_max: 100,
            max_redraws: 10_000,
        }
    }
}

impl Config {
    /// Absolute running delta above which a sequencer enters correction.
    ///
    /// Equal to `1.5 * component_max` rounded down. Staying below
    /// `2 * component_max` leaves the free state room to move.
    pub fn max_abs_delta(&self) -> Component {
        (self.component_max as Component) * 3 / 2
    }

    /// Checks that generation with these bounds is guaranteed to terminate.
    ///
    /// ### Errors
    /// - [`GenError::MaxTooLarge`] if `component_max` exceeds [`COMPONENT_LIMIT`].
    /// - [`GenError::InvalidBounds`] if `component_max <= component_min`.
    /// - [`GenError::SpanTooNarrow`] if `[min, max)` holds fewer than two
    ///   non-zero magnitudes.
    /// - [`GenError::MinTooLarge`] if `component_min` is larger than
    ///   `2 * component_max - max_abs_delta()`.
    pub fn validate(&self) -> Result<(), GenError> {
        let (min, max) = (self.component_min, self.component_max);
        if max > COMPONENT_LIMIT {
            return Err(GenError::MaxTooLarge {
                max,
                limit: COMPONENT_LIMIT,
            });
        }
        if max <= min {
            return Err(GenError::InvalidBounds { min, max });
        }
        // Zero re-draws and the penultimate guard each reject one magnitude.
        if max - min.max(1) < 2 {
            return Err(GenError::SpanTooNarrow { min, max });
        }
        // Smallest ceiling the free state can narrow to.
        let limit = (2 * self.component_max() - self.max_abs_delta()) as u32;
        if min > limit {
            return Err(GenError::MinTooLarge { min, limit });
        }
        Ok(())
    }

    #[inline]
    pub(crate) fn component_min(&self) -> Component {
        self.component_min as Component
    }

    #[inline]
    pub(crate) fn component_max(&self) -> Component {
        self.component_max as Component
    }
}
