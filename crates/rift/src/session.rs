//! # Arena Session
//!
//! Wires the scoring glue together: an injected pool registry and event
//! receiver, the score board, and the two bonus spawners. The session owns
//! its spawners and stops them deterministically on `end`; nothing fires
//! after teardown no matter when the next tick arrives.
//!
//! Everything here runs on the single frame-driven execution context —
//! `tick` is called from the simulation pass, and event producers reach the
//! session only through the bounded bus drained at the top of each tick.

use crate::bonus::{Bonus, BonusKind, BonusPrototype, BonusSpawn};
use crate::config::SessionConfig;
use crate::scoring::ScoreBoard;
use crate::spawner::{IntervalSpawner, SpawnRing};
use rand::Rng;
use rift_core::{PoolId, PoolRegistry, PoolResult};
use rift_shared::{EventReceiver, Vec3};

/// Name of the score-multiplier pool.
pub const MULTIPLIER_POOL: &str = "scoreMultipliers";

/// Name of the power-up pool.
pub const POWER_UP_POOL: &str = "powerUps";

/// Members in the score-multiplier pool when the session has to create it.
pub const MULTIPLIER_POOL_CAPACITY: usize = 5;

/// Members in the power-up pool when the session has to create it.
pub const POWER_UP_POOL_CAPACITY: usize = 3;

/// Gauge points an interval-spawned multiplier pickup is worth.
pub const MULTIPLIER_PICKUP_VALUE: i32 = 30;

/// One arena round: scoring plus periodic bonus placement.
pub struct BonusSession {
    /// The session's pools. Injected; the session is not its only user.
    registry: PoolRegistry<Bonus>,
    /// Score events drained once per tick.
    events: EventReceiver,
    /// Per-seat score bookkeeping.
    board: ScoreBoard,
    /// The score-multiplier pool.
    multiplier_pool: PoolId,
    /// The power-up pool.
    power_up_pool: PoolId,
    /// Periodic multiplier placement.
    multiplier_spawner: IntervalSpawner,
    /// Periodic power-up placement.
    power_up_spawner: IntervalSpawner,
    /// Set between `begin` and `end`; everything is a no-op outside it.
    running: bool,
}

impl BonusSession {
    /// Assembles a session from its injected collaborators.
    ///
    /// The two bonus pools are requested through the registry's normal
    /// create path: when the configuration already declared them, the
    /// existing pools are reused (the duplicate-name diagnostic fires);
    /// otherwise they are created at their default capacities.
    ///
    /// # Errors
    ///
    /// Configuration errors from pool creation.
    pub fn new(
        mut registry: PoolRegistry<Bonus>,
        events: EventReceiver,
        config: &SessionConfig,
    ) -> PoolResult<Self> {
        let multiplier_pool = registry.create(
            MULTIPLIER_POOL,
            MULTIPLIER_POOL_CAPACITY,
            BonusPrototype {
                kind: BonusKind::ScoreMultiplier,
                default_value: MULTIPLIER_PICKUP_VALUE,
            },
        )?;
        let power_up_pool = registry.create(
            POWER_UP_POOL,
            POWER_UP_POOL_CAPACITY,
            BonusPrototype {
                kind: BonusKind::PowerUp,
                default_value: 0,
            },
        )?;

        let spawn_ring = SpawnRing {
            min_radius: config.spawners.min_spawn_radius,
            max_radius: config.spawners.map_radius,
            offset: Vec3::ZERO,
        };
        let power_up_ring = SpawnRing {
            offset: config.spawners.power_up_offset,
            ..spawn_ring
        };

        Ok(Self {
            registry,
            events,
            board: ScoreBoard::new(config.scoring),
            multiplier_pool,
            power_up_pool,
            multiplier_spawner: IntervalSpawner::new(
                config.spawners.multiplier_interval_secs,
                spawn_ring,
            ),
            power_up_spawner: IntervalSpawner::new(
                config.spawners.power_up_interval_secs,
                power_up_ring,
            ),
            running: false,
        })
    }

    /// Starts a round: fresh board, armed spawners.
    pub fn begin(&mut self) {
        self.board.reset();
        self.multiplier_spawner.rearm();
        self.power_up_spawner.rearm();
        self.running = true;
    }

    /// Ends a round: spawners cancelled, board cleared.
    ///
    /// Idempotent. Ticks arriving after this are no-ops, so teardown does
    /// not depend on who stops calling first.
    pub fn end(&mut self) {
        self.running = false;
        self.multiplier_spawner.cancel();
        self.power_up_spawner.cancel();
        self.board.reset();
    }

    /// True between `begin` and `end`.
    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// One simulation-pass step: drain events, then tick both spawners.
    pub fn tick(&mut self, dt: f32, rng: &mut impl Rng) {
        if !self.running {
            return;
        }

        for event in self.events.drain() {
            if let Some(refund) = self.board.apply(&event, rng) {
                if let Some(pool) = self.registry.pool_mut(self.multiplier_pool) {
                    // Exhaustion drops the refund, same as any other spawn
                    // that finds no free member.
                    let _ = pool.spawn(BonusSpawn::AtWithValue(refund.position, refund.value));
                }
            }
        }

        if let Some(pool) = self.registry.pool_mut(self.multiplier_pool) {
            let _ = self.multiplier_spawner.tick(dt, pool, rng);
        }
        if let Some(pool) = self.registry.pool_mut(self.power_up_pool) {
            let _ = self.power_up_spawner.tick(dt, pool, rng);
        }
    }

    /// The session's score bookkeeping.
    #[must_use]
    pub const fn board(&self) -> &ScoreBoard {
        &self.board
    }

    /// The session's pool registry.
    #[must_use]
    pub const fn registry(&self) -> &PoolRegistry<Bonus> {
        &self.registry
    }

    /// The session's pool registry, mutably — collision/expiry glue
    /// reclaims collected pickups through this.
    pub fn registry_mut(&mut self) -> &mut PoolRegistry<Bonus> {
        &mut self.registry
    }

    /// Id of the score-multiplier pool.
    #[inline]
    #[must_use]
    pub const fn multiplier_pool(&self) -> PoolId {
        self.multiplier_pool
    }

    /// Id of the power-up pool.
    #[inline]
    #[must_use]
    pub const fn power_up_pool(&self) -> PoolId {
        self.power_up_pool
    }
}
