//! # Arena Session Demo
//!
//! Drives a complete scoring session against a simulated combat feed:
//! fixed 60 Hz timestep, seeded RNG, two minutes of play. Verifies the
//! whole path — events in, pools churning, spawners skipping on
//! exhaustion, deterministic teardown — without graphics or networking.
//!
//! Run with: `cargo run --bin arena_demo`

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rift::{BonusSession, SessionConfig, PLAYER_COUNT};
use rift_core::PoolRegistry;
use rift_shared::{EventBus, PlayerId, ScoreEvent, Vec3};

/// Simulation timestep (60 Hz).
const DT: f32 = 1.0 / 60.0;

/// Frames to simulate (two minutes).
const FRAMES: u32 = 2 * 60 * 60;

fn main() {
    let config = SessionConfig::default();
    let registry = PoolRegistry::from_descriptors(config.pools.clone());
    let bus = EventBus::new(1024);
    let sender = bus.sender();

    let mut session =
        BonusSession::new(registry, bus.receiver(), &config).expect("default config is valid");
    let mut rng = ChaCha8Rng::seed_from_u64(0x5EED);

    session.begin();

    for frame in 0..FRAMES {
        let seat = PlayerId::new((frame % PLAYER_COUNT as u32) as u8);

        // A steady trickle of combat, staggered across the seats.
        if frame % 45 == 0 {
            sender.send(ScoreEvent::UnitTookDamage {
                player: seat,
                score: 5,
            });
        }
        if frame % 300 == 0 {
            sender.send(ScoreEvent::UnitKilled {
                player: seat,
                score: 50,
            });
        }
        if frame % 700 == 120 {
            sender.send(ScoreEvent::PlayerDeath {
                player: seat,
                position: Vec3::new(12.0, 0.0, -30.0),
            });
        }

        session.tick(DT, &mut rng);

        // Every few seconds a player sweeps up one active multiplier.
        if frame % 400 == 399 {
            collect_one_multiplier(&mut session, &sender, seat);
        }
    }

    print_summary(&session);
    session.end();

    // Ticks after teardown must be inert.
    let in_use_before: usize = pools_in_use(&session);
    for _ in 0..600 {
        session.tick(DT, &mut rng);
    }
    assert_eq!(pools_in_use(&session), in_use_before);
    println!("\nsession ended cleanly; no spawns after teardown");
}

/// Reclaims the first active multiplier pickup and credits `seat` with it.
fn collect_one_multiplier(
    session: &mut BonusSession,
    sender: &rift_shared::EventSender,
    seat: PlayerId,
) {
    let pool_id = session.multiplier_pool();
    let Some(pool) = session.registry_mut().pool_mut(pool_id) else {
        return;
    };
    let Some((ticket, bonus)) = pool.iter_active().next() else {
        return;
    };
    let amount = bonus.value();
    if pool.reclaim(ticket).unwrap_or(false) {
        sender.send(ScoreEvent::MultiplierCollected {
            player: seat,
            amount,
        });
    }
}

/// Sum of active members across the session's pools.
fn pools_in_use(session: &BonusSession) -> usize {
    session.registry().iter().map(|pool| pool.in_use()).sum()
}

fn print_summary(session: &BonusSession) {
    println!("=== ARENA SESSION SUMMARY ===");
    let board = session.board();
    for slot in 0..PLAYER_COUNT as u8 {
        let p = PlayerId::new(slot);
        println!(
            "seat {slot}: score {}  mult x{}  deaths {}  gauge {:>4.0}%",
            board.score_text(p),
            board.multiplier_text(p),
            board.death_text(p),
            board.gauge_fill(p) * 100.0
        );
    }
    println!("--- pools ---");
    for pool in session.registry().iter() {
        println!(
            "{:<18} {} / {} in use{}",
            pool.name(),
            pool.in_use(),
            pool.capacity(),
            if pool.is_exhausted() { "  [exhausted]" } else { "" }
        );
    }
}
