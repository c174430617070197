//! Per-frame simulation step
//!
//! Advances the whole population by one tick and applies the respawn
//! policy. The host loop calls `tick` once per rendered frame, then reads
//! the updated poses (and light position) back out of the state.

use glam::Vec2;

use super::state::{RespawnPolicy, SimState};
use super::viewport::Viewport;

/// Inputs for a single tick, read at call time
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Current host surface size
    pub viewport: Viewport,
    /// Pointer position in surface pixels, if the pointer is over the
    /// surface this frame
    pub pointer: Option<Vec2>,
}

/// Advance the simulation by one tick.
///
/// Bodies are visited in stable population order. Each body either
/// respawns (lifetime expired or drifted above the exit band, one
/// respawn per tick no matter how many conditions fire) or integrates
/// its drift. The collection is never reordered or resized.
pub fn tick(state: &mut SimState, input: &FrameInput) {
    // First observable tick is 1, so the modulus check cannot fire for
    // the whole population on frame one.
    state.time_ticks += 1;
    let now = state.time_ticks;

    if let Some(pointer) = input.pointer {
        let world = input.viewport.pointer_to_world(pointer);
        state.light_pos.x = world.x;
        state.light_pos.y = world.y;
    }

    let ceiling = input.viewport.exit_ceiling();
    let policy = state.policy;
    let rng = &mut state.rng;
    for body in &mut state.bodies {
        // lifetime is clamped >= 1 at every respawn, so the modulus is
        // always defined
        let expired = match policy {
            RespawnPolicy::GlobalModulus => now % body.lifetime() as u64 == 0,
            RespawnPolicy::Age => now - body.spawn_tick() >= body.lifetime() as u64,
        };
        let escaped = body.position.y > ceiling;

        if expired || escaped {
            body.respawn(rng, input.viewport, now);
        } else {
            body.integrate();
        }
    }
}
