//! Generation of equilibrium vector sets: integer 2-D vectors whose X and Y
//! components each sum to exactly zero.
//!
//! Main components:
//! - [`sequencer`] — per-axis component state machine (free / correcting).
//! - [`generator`] — builds an [`generator::EquilibriumSet`] from two sequencers.
//! - [`vector`] — integer vectors and their display angle.
//! - [`config`] — component bounds and retry policy.
//! - [`observer`] — per-step hooks for diagnostics.
//! - [`error`] — validation and generation errors.
//! - [`types`] — shared type aliases and the [`types::Axis`] enum.

pub mod config;
pub mod error;
pub mod generator;
pub mod observer;
pub mod sequencer;
pub mod types;
pub mod vector;

pub use config::Config;
pub use error::GenError;
pub use generator::{EquilibriumSet, generate, generate_with_observer};
pub use observer::{GenerationStep, NoopObserver, StepObserver};
pub use vector::Vector;
