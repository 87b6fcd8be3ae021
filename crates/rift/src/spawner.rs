//! # Interval Spawners
//!
//! Periodic bonus placement, modeled as explicit frame-ticked tasks instead
//! of background timers: the session ticks its spawners with frame delta
//! time on the simulation pass, so every spawn happens on the same
//! execution context as every other pool operation.
//!
//! Exhaustion handling is cooperative — an interval that elapses while the
//! pool has no inactive member is simply skipped, never queued. A cancelled
//! spawner ignores all further ticks, which makes session teardown
//! deterministic regardless of call order.

use crate::bonus::{Bonus, BonusSpawn};
use rand::Rng;
use rift_core::{Pool, PoolTicket};
use rift_shared::Vec3;

/// Annulus on the arena floor that spawn positions are sampled from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpawnRing {
    /// Inner radius; keeps pickups away from the arena center.
    pub min_radius: f32,
    /// Outer radius.
    pub max_radius: f32,
    /// Fixed offset added to every sampled position.
    pub offset: Vec3,
}

impl SpawnRing {
    /// Samples a position: random yaw, random radius within the ring.
    pub fn sample(&self, rng: &mut impl Rng) -> Vec3 {
        let yaw = rng.gen_range(0.0..360.0);
        let radius = rng.gen_range(self.min_radius..=self.max_radius);
        (Vec3::X * radius).rotate_y(yaw) + self.offset
    }
}

/// A cancellable periodic spawn task.
///
/// Accumulates frame delta time; each time the interval elapses it attempts
/// one spawn at a ring-sampled position. At most one spawn per `tick` call.
pub struct IntervalSpawner {
    /// Seconds between spawn attempts. Positive.
    interval: f32,
    /// Delta time accumulated since the last attempt.
    elapsed: f32,
    /// Cancelled spawners ignore every tick.
    cancelled: bool,
    /// Where spawned pickups land.
    ring: SpawnRing,
}

impl IntervalSpawner {
    /// Creates a spawner that attempts a spawn every `interval_secs`.
    ///
    /// Non-positive intervals are nonsense; they are clamped to one
    /// millisecond rather than spinning every tick.
    #[must_use]
    pub fn new(interval_secs: f32, ring: SpawnRing) -> Self {
        Self {
            interval: interval_secs.max(0.001),
            elapsed: 0.0,
            cancelled: false,
            ring,
        }
    }

    /// Stops the spawner. Every later tick is a no-op.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// True once the spawner has been cancelled.
    #[inline]
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Re-arms the spawner for a new session: not cancelled, interval
    /// starting from zero.
    pub fn rearm(&mut self) {
        self.cancelled = false;
        self.elapsed = 0.0;
    }

    /// Advances the spawner by `dt` seconds.
    ///
    /// When the interval elapses, the pool's exhaustion flag is polled
    /// first; an exhausted pool means the attempt is skipped and the
    /// interval consumed (the original cadence is kept, nothing is queued).
    pub fn tick(
        &mut self,
        dt: f32,
        pool: &mut Pool<Bonus>,
        rng: &mut impl Rng,
    ) -> Option<PoolTicket> {
        if self.cancelled {
            return None;
        }
        self.elapsed += dt;
        if self.elapsed < self.interval {
            return None;
        }
        self.elapsed -= self.interval;

        if pool.is_exhausted() {
            return None;
        }
        pool.spawn(BonusSpawn::At(self.ring.sample(rng)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bonus::{BonusKind, BonusPrototype};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rift_core::PoolId;

    const RING: SpawnRing = SpawnRing {
        min_radius: 15.0,
        max_radius: 170.0,
        offset: Vec3::ZERO,
    };

    fn pool(capacity: usize) -> Pool<Bonus> {
        Pool::new(
            PoolId::new(0),
            "multipliers",
            capacity,
            BonusPrototype {
                kind: BonusKind::ScoreMultiplier,
                default_value: 30,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_no_spawn_before_interval_elapses() {
        let mut spawner = IntervalSpawner::new(15.0, RING);
        let mut pool = pool(5);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        for _ in 0..100 {
            assert!(spawner.tick(0.1, &mut pool, &mut rng).is_none());
        }
        // 100 * 0.1 = 10s accumulated; crossing 15s fires.
        assert!(spawner.tick(5.0, &mut pool, &mut rng).is_some());
        assert_eq!(pool.in_use(), 1);
    }

    #[test]
    fn test_sampled_positions_stay_in_ring() {
        let mut spawner = IntervalSpawner::new(1.0, RING);
        let mut pool = pool(10);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        while let Some(ticket) = spawner.tick(1.0, &mut pool, &mut rng) {
            let radius = pool.get(ticket).unwrap().position().length();
            assert!((RING.min_radius..=RING.max_radius).contains(&radius));
        }
        assert!(pool.is_exhausted());
    }

    #[test]
    fn test_exhausted_pool_skips_the_tick() {
        let mut spawner = IntervalSpawner::new(1.0, RING);
        let mut pool = pool(1);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let ticket = spawner.tick(1.0, &mut pool, &mut rng).unwrap();
        assert!(pool.is_exhausted());

        // Interval elapses against an exhausted pool: skipped, not queued.
        assert!(spawner.tick(1.0, &mut pool, &mut rng).is_none());

        // Freeing capacity does not replay the skipped attempt...
        assert!(pool.reclaim(ticket).unwrap());
        assert!(spawner.tick(0.5, &mut pool, &mut rng).is_none());
        // ...the next full interval spawns again.
        assert!(spawner.tick(0.5, &mut pool, &mut rng).is_some());
    }

    #[test]
    fn test_cancelled_spawner_never_fires() {
        let mut spawner = IntervalSpawner::new(1.0, RING);
        let mut pool = pool(5);
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        spawner.cancel();
        assert!(spawner.is_cancelled());
        for _ in 0..10 {
            assert!(spawner.tick(60.0, &mut pool, &mut rng).is_none());
        }
        assert_eq!(pool.in_use(), 0);

        // Re-arming starts a fresh interval; stale accumulation is gone.
        spawner.rearm();
        assert!(spawner.tick(0.5, &mut pool, &mut rng).is_none());
        assert!(spawner.tick(0.6, &mut pool, &mut rng).is_some());
    }
}
