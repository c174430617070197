//! Drift Field entry point
//!
//! Headless driver loop: advances the simulation for a fixed number of
//! ticks and logs sample poses. A graphical host embeds the library and
//! calls `sim::tick` from its own frame callback instead.

use std::path::Path;

use glam::Vec2;

use driftfield::Settings;
use driftfield::sim::{self, FrameInput, SimState, Viewport};

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new("driftfield.json"));
    let seed = settings.seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    log::info!(
        "Drift Field starting (seed {seed}, {} bodies, {:?} policy)",
        settings.population,
        settings.policy
    );

    let viewport = Viewport::new(1280.0, 720.0);
    let mut state = SimState::new(seed, &settings.roster(), viewport);
    state.policy = settings.policy;

    // Park the pointer at screen center so the light has a stable anchor.
    let input = FrameInput {
        viewport,
        pointer: Some(Vec2::new(viewport.width / 2.0, viewport.height / 2.0)),
    };
    for _ in 0..600 {
        sim::tick(&mut state, &input);
    }

    log::info!("{} ticks advanced", state.time_ticks);
    for body in state.bodies.iter().take(4) {
        log::info!(
            "body {} ({}): pos ({:.1}, {:.1}, {:.1}), lifetime {}",
            body.id,
            body.shape.as_str(),
            body.position.x,
            body.position.y,
            body.position.z,
            body.lifetime()
        );
    }

    // Optional snapshot dump for diagnostics: `driftfield <path>`
    if let Some(path) = std::env::args().nth(1) {
        match serde_json::to_string_pretty(&state) {
            Ok(json) => match std::fs::write(&path, json) {
                Ok(()) => log::info!("snapshot written to {path}"),
                Err(err) => log::error!("failed to write snapshot {path}: {err}"),
            },
            Err(err) => log::error!("failed to serialize snapshot: {err}"),
        }
    }
}
