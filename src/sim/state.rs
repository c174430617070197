//! Body state and respawn behavior
//!
//! All state that must be persisted for snapshot/determinism lives here.

use glam::Vec3;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

use super::viewport::Viewport;
use crate::consts::*;

/// Visual mesh category for a body.
///
/// Opaque to the simulation: it only tells the renderer which geometry to
/// instance, and carries no numeric behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Cylinder,
    Cone,
    Torus,
    TorusKnot,
    Octahedron,
    Icosahedron,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Cylinder,
        ShapeKind::Cone,
        ShapeKind::Torus,
        ShapeKind::TorusKnot,
        ShapeKind::Octahedron,
        ShapeKind::Icosahedron,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Cone => "cone",
            ShapeKind::Torus => "torus",
            ShapeKind::TorusKnot => "torusknot",
            ShapeKind::Octahedron => "octahedron",
            ShapeKind::Icosahedron => "icosahedron",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cylinder" => Some(ShapeKind::Cylinder),
            "cone" => Some(ShapeKind::Cone),
            "torus" => Some(ShapeKind::Torus),
            "torusknot" => Some(ShapeKind::TorusKnot),
            "octahedron" => Some(ShapeKind::Octahedron),
            "icosahedron" => Some(ShapeKind::Icosahedron),
            _ => None,
        }
    }
}

/// When a body's randomized lifetime forces a respawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RespawnPolicy {
    /// Respawn whenever the global tick is a multiple of the body's
    /// lifetime. A body reborn mid-stream snaps to the next global
    /// multiple rather than living its full lifetime.
    #[default]
    GlobalModulus,
    /// Respawn once the body has lived `lifetime` ticks since its last
    /// spawn, regardless of the global tick value.
    Age,
}

/// One drifting body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub id: u32,
    pub shape: ShapeKind,
    /// World-space position of the body's origin
    pub position: Vec3,
    /// Euler angles about each axis, radians
    pub rotation: Vec3,
    /// Added to `position` once per tick
    pub velocity: Vec3,
    /// Added to `rotation` once per tick
    pub angular_velocity: Vec3,
    /// Ticks until an unconditional respawn; always >= 1
    pub(crate) lifetime: u32,
    /// Tick of the most recent (re)spawn
    pub(crate) spawn_tick: u64,
}

impl Body {
    /// Create a body with a uniformly random orientation and a zeroed
    /// pose. The caller respawns it before the first tick.
    pub fn new(id: u32, shape: ShapeKind, rng: &mut impl Rng) -> Self {
        Self {
            id,
            shape,
            position: Vec3::ZERO,
            rotation: Vec3::new(
                rng.random::<f32>() * TAU,
                rng.random::<f32>() * TAU,
                rng.random::<f32>() * TAU,
            ),
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            lifetime: 1,
            spawn_tick: 0,
        }
    }

    /// Ticks until an unconditional respawn (diagnostics/testing)
    #[inline]
    pub fn lifetime(&self) -> u32 {
        self.lifetime
    }

    /// Tick of the most recent (re)spawn
    #[inline]
    pub fn spawn_tick(&self) -> u64 {
        self.spawn_tick
    }

    /// Re-randomize the body in place.
    ///
    /// Position lands just off the top-left of the visible band, velocity
    /// drifts it right and down, and a fresh lifetime is drawn. Identity
    /// (`id`, `shape`) survives; everything else is overwritten except
    /// `rotation`, which only receives a bump about the z axis.
    pub fn respawn(&mut self, rng: &mut impl Rng, viewport: Viewport, tick: u64) {
        let half_w = viewport.half_width_world();
        let half_h = viewport.half_height_world();

        self.position = Vec3::new(
            -half_w + rng.random_range(-SPAWN_JITTER..SPAWN_JITTER),
            half_h + rng.random_range(-SPAWN_JITTER..SPAWN_JITTER) - SPAWN_DROP,
            0.0,
        );
        self.rotation.z += FRAC_PI_2 + (rng.random::<f32>() - 0.5).sin();
        self.velocity = Vec3::new(
            (rng.random::<f32>() + 0.2) * 0.6,
            (rng.random::<f32>() - 0.7) * 0.6,
            rng.random::<f32>() / 2.0 - 0.25,
        );
        self.angular_velocity = Vec3::new(
            (rng.random::<f32>() - 0.5) * 0.05,
            (rng.random::<f32>() - 0.5) * 0.05,
            (rng.random::<f32>() - 0.5) * 0.03,
        );
        // Lifetime doubles as a modulus downstream; it must stay positive.
        let drawn = LIFETIME_MIN + (rng.random::<f32>() * LIFETIME_SPREAD as f32) as u32;
        self.lifetime = drawn.max(1);
        self.spawn_tick = tick;

        log::trace!(
            "body {} ({}) respawned at ({:.1}, {:.1}), lifetime {}",
            self.id,
            self.shape.as_str(),
            self.position.x,
            self.position.y,
            self.lifetime
        );
    }

    /// Advance pose by one tick of drift and tumble
    #[inline]
    pub fn integrate(&mut self) {
        self.position += self.velocity;
        self.rotation += self.angular_velocity;
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the single sequential call site for all randomness
    pub(crate) rng: Pcg32,
    /// Tick counter. Starts at 0; the first `tick` call advances it to 1
    /// so the modulus respawn check never fires on frame one.
    pub time_ticks: u64,
    /// Active respawn policy
    pub policy: RespawnPolicy,
    /// Pointer-driven light position, world units (z fixed at 0)
    pub light_pos: Vec3,
    /// The population, in stable order. Never reordered or resized after
    /// construction.
    pub bodies: Vec<Body>,
}

impl SimState {
    /// Build a population from the given shape roster, freshly respawned
    /// against the given viewport.
    pub fn new(seed: u64, shapes: &[ShapeKind], viewport: Viewport) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bodies = shapes
            .iter()
            .enumerate()
            .map(|(i, &shape)| {
                let mut body = Body::new(i as u32 + 1, shape, &mut rng);
                body.respawn(&mut rng, viewport, 0);
                body
            })
            .collect::<Vec<_>>();

        log::info!("population of {} bodies spawned (seed {seed})", bodies.len());

        Self {
            seed,
            rng,
            time_ticks: 0,
            policy: RespawnPolicy::default(),
            light_pos: Vec3::ZERO,
            bodies,
        }
    }
}
