//! Simulation module
//!
//! All gameplay physics lives here. This module must stay free of
//! rendering, timing and platform dependencies:
//! - One step per call, no internal clock
//! - Seeded RNG only (kick-off velocity)
//! - State lives in an owned `Pitch`, never in globals

pub mod collision;
pub mod goal;
pub mod state;
pub mod tick;

pub use collision::{BoundaryHit, PostContact, classify_boundary, reflect_velocity};
pub use goal::{Goal, PostSide, Team};
pub use state::{Ball, GameEvent, Pitch, Score, Snapshot};
