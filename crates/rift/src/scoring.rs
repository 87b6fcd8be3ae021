//! # Score Bookkeeping
//!
//! Per-player score, death, multiplier and power-up-gauge tracking for the
//! four arena seats. The board is pure bookkeeping: it consumes score
//! events and answers display queries. The one pool interaction it implies —
//! the multiplier refund scattered where a player died — is returned as a
//! request for the session to execute, keeping the board pool-free and
//! trivially testable.

use crate::config::ScoringConfig;
use rand::Rng;
use rift_shared::{PlayerId, ScoreEvent, Vec3};

/// Number of seats in the arena.
pub const PLAYER_COUNT: usize = 4;

/// Radius of the scatter ring for death-refund pickups.
pub const REFUND_SCATTER_RADIUS: f32 = 10.0;

/// A multiplier pickup the board wants spawned after a death.
///
/// When a player dies, part of their multiplier is docked and thrown back
/// into the arena as a pickup worth the docked amount in gauge points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MultiplierRefund {
    /// Where to place the pickup.
    pub position: Vec3,
    /// Gauge points the pickup is worth.
    pub value: i32,
}

/// Score state for the four arena seats.
pub struct ScoreBoard {
    /// Scoring tunables.
    config: ScoringConfig,
    /// Accumulated score per seat.
    scores: [i32; PLAYER_COUNT],
    /// Death count per seat.
    deaths: [u32; PLAYER_COUNT],
    /// Score multiplier per seat. Starts at 1; the death dock takes a
    /// truncated fraction of the current value, so it never reaches 0.
    multipliers: [i32; PLAYER_COUNT],
    /// Power-up gauge per seat, in gauge points.
    gauges: [i32; PLAYER_COUNT],
}

impl ScoreBoard {
    /// Creates a board with all seats at their session-start values.
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            scores: [0; PLAYER_COUNT],
            deaths: [0; PLAYER_COUNT],
            multipliers: [1; PLAYER_COUNT],
            gauges: [0; PLAYER_COUNT],
        }
    }

    /// Resets every seat to its session-start values.
    pub fn reset(&mut self) {
        self.scores = [0; PLAYER_COUNT];
        self.deaths = [0; PLAYER_COUNT];
        self.multipliers = [1; PLAYER_COUNT];
        self.gauges = [0; PLAYER_COUNT];
    }

    /// Applies one score event.
    ///
    /// Returns a [`MultiplierRefund`] when the event was a death that
    /// docked a non-zero multiplier amount; the caller spawns the pickup.
    pub fn apply(&mut self, event: &ScoreEvent, rng: &mut impl Rng) -> Option<MultiplierRefund> {
        let Some(seat) = self.seat(event.player()) else {
            tracing::debug!("dropping score event for unknown seat: {event:?}");
            return None;
        };

        match *event {
            ScoreEvent::UnitKilled { score, .. }
            | ScoreEvent::UnitTookDamage { score, .. }
            | ScoreEvent::PlayerGainScore { score, .. } => {
                self.scores[seat] += score * self.multipliers[seat];
                None
            }
            ScoreEvent::MultiplierCollected { amount, .. } => {
                self.gauges[seat] += amount;
                if self.gauges[seat] >= self.config.power_up_per_point {
                    self.multipliers[seat] += 1;
                    self.gauges[seat] -= self.config.power_up_per_point;
                }
                None
            }
            ScoreEvent::PlayerDeath { position, .. } => {
                self.deaths[seat] += 1;
                let docked =
                    (self.multipliers[seat] as f32 * self.config.mult_lost_on_death) as i32;
                self.multipliers[seat] -= docked;
                if docked == 0 {
                    return None;
                }
                let scatter =
                    (Vec3::X * REFUND_SCATTER_RADIUS).rotate_y(rng.gen_range(0.0..360.0));
                Some(MultiplierRefund {
                    position: position + scatter,
                    value: docked * self.config.power_up_per_point,
                })
            }
        }
    }

    /// Accumulated score of a seat.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> i32 {
        self.seat(player).map_or(0, |seat| self.scores[seat])
    }

    /// Death count of a seat.
    #[must_use]
    pub fn deaths(&self, player: PlayerId) -> u32 {
        self.seat(player).map_or(0, |seat| self.deaths[seat])
    }

    /// Current score multiplier of a seat.
    #[must_use]
    pub fn multiplier(&self, player: PlayerId) -> i32 {
        self.seat(player).map_or(1, |seat| self.multipliers[seat])
    }

    /// Power-up gauge fill of a seat as a fraction of the next multiplier
    /// step. Exceeds 1.0 while collections outpace the one-step-per-event
    /// rollover.
    #[must_use]
    pub fn gauge_fill(&self, player: PlayerId) -> f32 {
        self.seat(player)
            .map_or(0.0, |seat| self.gauges[seat] as f32)
            / self.config.power_up_per_point as f32
    }

    /// Six-digit score display text.
    #[must_use]
    pub fn score_text(&self, player: PlayerId) -> String {
        padded(self.score(player), 6)
    }

    /// Three-digit multiplier display text.
    #[must_use]
    pub fn multiplier_text(&self, player: PlayerId) -> String {
        padded(self.multiplier(player), 3)
    }

    /// Three-digit death-counter display text.
    #[must_use]
    pub fn death_text(&self, player: PlayerId) -> String {
        padded(self.deaths(player) as i32, 3)
    }

    /// Maps a player id to a seat index, if it is in range.
    fn seat(&self, player: PlayerId) -> Option<usize> {
        (player.index() < PLAYER_COUNT).then_some(player.index())
    }
}

/// Zero-pads to `width` digits, keeping the trailing digits on overflow —
/// the counter wraps visually rather than widening the display.
fn padded(value: i32, width: usize) -> String {
    let text = format!("{value:0width$}");
    text[text.len() - width..].to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    fn board() -> ScoreBoard {
        ScoreBoard::new(ScoringConfig::default())
    }

    #[test]
    fn test_score_gain_is_multiplied() {
        let mut board = board();
        let mut rng = rng();
        let p = PlayerId::new(0);

        board.apply(&ScoreEvent::UnitKilled { player: p, score: 50 }, &mut rng);
        assert_eq!(board.score(p), 50);

        // Earn a multiplier step, then score again.
        board.apply(
            &ScoreEvent::MultiplierCollected { player: p, amount: 10 },
            &mut rng,
        );
        assert_eq!(board.multiplier(p), 2);
        board.apply(
            &ScoreEvent::UnitTookDamage { player: p, score: 10 },
            &mut rng,
        );
        assert_eq!(board.score(p), 70);
    }

    #[test]
    fn test_gauge_rolls_over_one_step_per_event() {
        let mut board = board();
        let mut rng = rng();
        let p = PlayerId::new(1);

        board.apply(
            &ScoreEvent::MultiplierCollected { player: p, amount: 30 },
            &mut rng,
        );
        // One step per event even when the gauge could cover several.
        assert_eq!(board.multiplier(p), 2);
        assert!((board.gauge_fill(p) - 2.0).abs() < f32::EPSILON);

        board.apply(
            &ScoreEvent::MultiplierCollected { player: p, amount: 0 },
            &mut rng,
        );
        assert_eq!(board.multiplier(p), 3);
    }

    #[test]
    fn test_death_docks_multiplier_and_refunds() {
        let config = ScoringConfig {
            power_up_per_point: 10,
            mult_lost_on_death: 0.5,
        };
        let mut board = ScoreBoard::new(config);
        let mut rng = rng();
        let p = PlayerId::new(2);

        board.apply(
            &ScoreEvent::MultiplierCollected { player: p, amount: 10 },
            &mut rng,
        );
        board.apply(
            &ScoreEvent::MultiplierCollected { player: p, amount: 10 },
            &mut rng,
        );
        board.apply(
            &ScoreEvent::MultiplierCollected { player: p, amount: 10 },
            &mut rng,
        );
        assert_eq!(board.multiplier(p), 4);

        let died_at = Vec3::new(20.0, 0.0, -5.0);
        let refund = board
            .apply(
                &ScoreEvent::PlayerDeath {
                    player: p,
                    position: died_at,
                },
                &mut rng,
            )
            .unwrap();

        assert_eq!(board.deaths(p), 1);
        assert_eq!(board.multiplier(p), 2);
        assert_eq!(refund.value, 2 * 10);
        let scatter = refund.position.distance(died_at);
        assert!((scatter - REFUND_SCATTER_RADIUS).abs() < 1e-3);
    }

    #[test]
    fn test_base_multiplier_death_refunds_nothing() {
        let mut board = board();
        let mut rng = rng();
        let p = PlayerId::new(3);

        let refund = board.apply(
            &ScoreEvent::PlayerDeath {
                player: p,
                position: Vec3::ZERO,
            },
            &mut rng,
        );
        assert!(refund.is_none());
        assert_eq!(board.deaths(p), 1);
        assert_eq!(board.multiplier(p), 1);
    }

    #[test]
    fn test_display_texts_are_fixed_width() {
        let mut board = board();
        let mut rng = rng();
        let p = PlayerId::new(0);

        assert_eq!(board.score_text(p), "000000");
        assert_eq!(board.multiplier_text(p), "001");
        assert_eq!(board.death_text(p), "000");

        board.apply(
            &ScoreEvent::PlayerGainScore {
                player: p,
                score: 1234,
            },
            &mut rng,
        );
        assert_eq!(board.score_text(p), "001234");

        // Overflow keeps the trailing digits.
        board.apply(
            &ScoreEvent::PlayerGainScore {
                player: p,
                score: 9_000_000,
            },
            &mut rng,
        );
        assert_eq!(board.score_text(p).len(), 6);
    }

    #[test]
    fn test_unknown_seat_is_dropped() {
        let mut board = board();
        let mut rng = rng();
        let ghost = PlayerId::new(9);

        let refund = board.apply(
            &ScoreEvent::PlayerDeath {
                player: ghost,
                position: Vec3::ZERO,
            },
            &mut rng,
        );
        assert!(refund.is_none());
        for slot in 0..PLAYER_COUNT as u8 {
            assert_eq!(board.deaths(PlayerId::new(slot)), 0);
        }
    }

    #[test]
    fn test_reset_restores_session_start() {
        let mut board = board();
        let mut rng = rng();
        let p = PlayerId::new(0);

        board.apply(&ScoreEvent::UnitKilled { player: p, score: 10 }, &mut rng);
        board.apply(
            &ScoreEvent::MultiplierCollected { player: p, amount: 10 },
            &mut rng,
        );
        board.reset();

        assert_eq!(board.score(p), 0);
        assert_eq!(board.multiplier(p), 1);
        assert!((board.gauge_fill(p)).abs() < f32::EPSILON);
    }
}
