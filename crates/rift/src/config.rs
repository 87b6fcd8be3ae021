//! # Session Configuration
//!
//! Everything tunable about a session lives in one TOML document, loaded
//! once at startup. The pool list is a plain descriptor list: incomplete
//! entries survive parsing and are skipped (with a diagnostic) when the
//! registry is built, so one bad entry never takes the session down.

use crate::bonus::{BonusKind, BonusPrototype};
use rift_core::PoolDescriptor;
use rift_shared::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading a session configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read session config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid TOML for [`SessionConfig`].
    #[error("failed to parse session config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Scoring tunables.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Gauge points needed to earn one multiplier step.
    pub power_up_per_point: i32,
    /// Fraction of the multiplier docked on death.
    pub mult_lost_on_death: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            power_up_per_point: 10,
            mult_lost_on_death: 0.1,
        }
    }
}

/// Interval-spawner tunables.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Seconds between multiplier spawn attempts.
    pub multiplier_interval_secs: f32,
    /// Seconds between power-up spawn attempts.
    pub power_up_interval_secs: f32,
    /// Inner radius of the spawn ring; keeps pickups off the arena center.
    pub min_spawn_radius: f32,
    /// Outer radius of the spawn ring (the playable map extent).
    pub map_radius: f32,
    /// Fixed offset applied to power-up spawn positions.
    pub power_up_offset: Vec3,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            multiplier_interval_secs: 15.0,
            power_up_interval_secs: 30.0,
            min_spawn_radius: 15.0,
            map_radius: 170.0,
            power_up_offset: Vec3::new(0.0, 1.0, 0.0),
        }
    }
}

/// Complete configuration for one arena session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Pool descriptors handed to [`PoolRegistry::from_descriptors`].
    ///
    /// [`PoolRegistry::from_descriptors`]: rift_core::PoolRegistry::from_descriptors
    pub pools: Vec<PoolDescriptor<BonusPrototype>>,
    /// Scoring tunables.
    pub scoring: ScoringConfig,
    /// Spawner tunables.
    pub spawners: SpawnerConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            pools: vec![
                PoolDescriptor::new(
                    "scoreMultipliers",
                    5,
                    BonusPrototype {
                        kind: BonusKind::ScoreMultiplier,
                        default_value: 30,
                    },
                ),
                PoolDescriptor::new(
                    "powerUps",
                    3,
                    BonusPrototype {
                        kind: BonusKind::PowerUp,
                        default_value: 0,
                    },
                ),
            ],
            scoring: ScoringConfig::default(),
            spawners: SpawnerConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] if the document is malformed. Note that an
    /// *incomplete pool entry* is not a parse error — it deserializes with
    /// its missing fields unset and is skipped later, at registry build.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] / [`ConfigError::Parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }
}
