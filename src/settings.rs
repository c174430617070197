//! Host-facing settings
//!
//! Persisted as JSON next to the embedding application. Loading never
//! fails: malformed or missing files fall back to defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::consts::DEFAULT_POPULATION;
use crate::sim::{RespawnPolicy, ShapeKind};

/// Simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of bodies in the population
    pub population: usize,
    /// Lifetime respawn policy
    pub policy: RespawnPolicy,
    /// Fixed run seed; `None` derives one from the clock at startup
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            population: DEFAULT_POPULATION,
            policy: RespawnPolicy::default(),
            seed: None,
        }
    }
}

impl Settings {
    /// Shape roster for the population, cycling through the categories
    pub fn roster(&self) -> Vec<ShapeKind> {
        ShapeKind::ALL
            .iter()
            .copied()
            .cycle()
            .take(self.population)
            .collect()
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}
