//! # RIFT - Gameplay Glue
//!
//! The layer between combat events and the pool subsystem: bonus pickups,
//! per-seat scoring, periodic spawners, and the session that wires them.
//!
//! ## Data flow
//!
//! ```text
//! combat ──ScoreEvent──▶ EventBus ──drain──▶ BonusSession::tick
//!                                                 │
//!                 ┌───────────────────────────────┤
//!                 ▼                               ▼
//!            ScoreBoard                    IntervalSpawner
//!        (scores, gauges,                 (periodic pickups,
//!         death refunds)                   skip on exhausted)
//!                 └───────────┬───────────────────┘
//!                             ▼
//!                     PoolRegistry<Bonus>
//! ```
//!
//! The registry and the event receiver are injected; nothing in this crate
//! reaches for a global.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod bonus;
pub mod config;
pub mod scoring;
pub mod session;
pub mod spawner;

pub use bonus::{Bonus, BonusKind, BonusPrototype, BonusSpawn};
pub use config::{ConfigError, ScoringConfig, SessionConfig, SpawnerConfig};
pub use scoring::{MultiplierRefund, ScoreBoard, PLAYER_COUNT};
pub use session::{BonusSession, MULTIPLIER_POOL, POWER_UP_POOL};
pub use spawner::{IntervalSpawner, SpawnRing};
