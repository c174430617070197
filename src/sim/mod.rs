//! Deterministic simulation module
//!
//! All body lifecycle logic lives here. This module must be pure and
//! deterministic:
//! - Tick-driven only
//! - Seeded RNG only
//! - Stable iteration order (population order never changes)
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;
pub mod viewport;

pub use state::{Body, RespawnPolicy, ShapeKind, SimState};
pub use tick::{FrameInput, tick};
pub use viewport::Viewport;
