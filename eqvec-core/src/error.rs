//! Error types for configuration validation and set generation.

use crate::types::{Axis, VecIndex};
use thiserror::Error;

/// Errors reported by [`crate::config::Config::validate`] and the generator.
///
/// Every bounds variant is detected before the first draw; only
/// [`GenError::RedrawLimit`] can surface in the middle of a run.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// `component_max` must be strictly greater than `component_min`.
    #[error("invalid bounds: component_max ({max}) must be greater than component_min ({min})")]
    InvalidBounds { min: u32, max: u32 },

    /// The half-open draw range `[min, max)` holds fewer than two magnitudes.
    #[error("bounds too narrow: [{min}, {max}) must contain at least two magnitudes")]
    SpanTooNarrow { min: u32, max: u32 },

    /// `component_min` is above what the free-state narrowing can still honour.
    #[error("component_min ({min}) exceeds the limit {limit} implied by component_max")]
    MinTooLarge { min: u32, limit: u32 },

    /// `component_max` would overflow the running delta arithmetic.
    #[error("component_max ({max}) exceeds the supported limit {limit}")]
    MaxTooLarge { max: u32, limit: u32 },

    /// A re-draw loop gave up after `attempts` tries.
    #[error("gave up re-drawing the {axis} component of vector {index} after {attempts} attempts")]
    RedrawLimit {
        index: VecIndex,
        axis: Axis,
        attempts: u32,
    },
}
