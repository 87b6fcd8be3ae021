//! # Bonus Entities
//!
//! The pooled pickups of the arena: score multipliers and power-ups. One
//! concrete type covers both kinds; the prototype decides which kind a pool
//! serves and what a pickup is worth by default.

use rift_core::Poolable;
use rift_shared::Vec3;
use serde::{Deserialize, Serialize};

/// The kinds of bonus pickup the arena spawns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BonusKind {
    /// Fills the collector's power-up gauge toward a score multiplier.
    ScoreMultiplier,
    /// Grants a power-up on pickup.
    PowerUp,
}

/// Template all members of a bonus pool are instantiated from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BonusPrototype {
    /// Which kind of pickup this pool serves.
    pub kind: BonusKind,
    /// Value a pickup carries when spawned without an explicit one.
    pub default_value: i32,
}

/// Construction arguments accepted on each bonus activation.
///
/// The two shapes the gameplay uses: interval spawners place a pickup with
/// its prototype's default value, the death refund places one with an
/// explicit value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BonusSpawn {
    /// Place at a position with the prototype's default value.
    At(Vec3),
    /// Place at a position with an explicit value.
    AtWithValue(Vec3, i32),
}

/// One pooled bonus pickup.
pub struct Bonus {
    /// Kind inherited from the prototype.
    kind: BonusKind,
    /// Default value inherited from the prototype.
    default_value: i32,
    /// Where the pickup currently sits. Zero while inactive.
    position: Vec3,
    /// What collecting the pickup is worth. Zero while inactive.
    value: i32,
}

impl Bonus {
    /// Which kind of pickup this is.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> BonusKind {
        self.kind
    }

    /// Where the pickup currently sits.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// What collecting the pickup is worth.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.value
    }
}

impl Poolable for Bonus {
    type Prototype = BonusPrototype;
    type SpawnArgs = BonusSpawn;

    fn instantiate(prototype: &BonusPrototype) -> Self {
        Self {
            kind: prototype.kind,
            default_value: prototype.default_value,
            position: Vec3::ZERO,
            value: 0,
        }
    }

    fn on_spawn(&mut self, args: BonusSpawn) {
        match args {
            BonusSpawn::At(position) => {
                self.position = position;
                self.value = self.default_value;
            }
            BonusSpawn::AtWithValue(position, value) => {
                self.position = position;
                self.value = value;
            }
        }
    }

    fn on_return(&mut self) {
        self.position = Vec3::ZERO;
        self.value = 0;
    }
}
