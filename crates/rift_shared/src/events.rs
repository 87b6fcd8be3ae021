//! # Gameplay Event Bus
//!
//! Typed pub/sub messaging between gameplay systems. Combat publishes what
//! happened; the scoring glue drains the bus once per frame and reacts.
//!
//! The pool subsystem does NOT depend on this module — events are glue-level
//! plumbing, and only the gameplay crate consumes them.
//!
//! Every payload is a struct variant: there is no dynamic argument bundle to
//! cast, so a malformed payload is a compile error instead of a runtime one.

use crate::math::Vec3;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

/// Zero-based arena slot of a player.
///
/// The arena seats four; out-of-range ids are dropped by consumers with a
/// diagnostic rather than panicking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Creates a player id from a zero-based slot.
    #[inline]
    #[must_use]
    pub const fn new(slot: u8) -> Self {
        Self(slot)
    }

    /// Zero-based slot, usable as an array index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Events the scoring system reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum ScoreEvent {
    /// A unit died to a player's attack.
    UnitKilled {
        /// Player credited with the kill.
        player: PlayerId,
        /// Score value of the kill.
        score: i32,
    },

    /// A unit took damage from a player.
    UnitTookDamage {
        /// Player credited with the damage.
        player: PlayerId,
        /// Score value of the damage dealt.
        score: i32,
    },

    /// A player earned score directly (objectives, pickups).
    PlayerGainScore {
        /// Player receiving the score.
        player: PlayerId,
        /// Score value gained.
        score: i32,
    },

    /// A player collected a score-multiplier pickup.
    MultiplierCollected {
        /// Player who collected the pickup.
        player: PlayerId,
        /// Gauge points the pickup is worth.
        amount: i32,
    },

    /// A player died.
    PlayerDeath {
        /// Player who died.
        player: PlayerId,
        /// Where they died; the multiplier refund scatters around this.
        position: Vec3,
    },
}

impl ScoreEvent {
    /// Returns the player this event concerns.
    #[must_use]
    pub const fn player(&self) -> PlayerId {
        match self {
            Self::UnitKilled { player, .. }
            | Self::UnitTookDamage { player, .. }
            | Self::PlayerGainScore { player, .. }
            | Self::MultiplierCollected { player, .. }
            | Self::PlayerDeath { player, .. } => *player,
        }
    }
}

/// Bounded pub/sub bus for gameplay events.
///
/// Capacity is fixed at construction so a stalled consumer cannot grow
/// memory mid-session.
pub struct EventBus {
    /// Sender end - held by event producers.
    sender: Sender<ScoreEvent>,
    /// Receiver end - held by event consumers.
    receiver: Receiver<ScoreEvent>,
}

impl EventBus {
    /// Creates a new event bus.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum events in flight. 1024 suits a game session.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle (clone for multiple producers).
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle (clone for multiple consumers).
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }

    /// Creates a connected sender/receiver pair.
    #[must_use]
    pub fn create_pair(capacity: usize) -> (EventSender, EventReceiver) {
        let bus = Self::new(capacity);
        (bus.sender(), bus.receiver())
    }
}

/// Handle for publishing events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<ScoreEvent>,
}

impl EventSender {
    /// Publishes an event (non-blocking).
    ///
    /// Returns `false` if the bus is full or disconnected; the event is
    /// dropped rather than stalling the frame.
    #[inline]
    pub fn send(&self, event: ScoreEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle for consuming events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<ScoreEvent>,
}

impl EventReceiver {
    /// Receives all pending events (non-blocking).
    ///
    /// The once-per-frame drain the scoring pass runs.
    #[inline]
    pub fn drain(&self) -> Vec<ScoreEvent> {
        let mut events = Vec::with_capacity(16);
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Receives one event (non-blocking).
    #[inline]
    pub fn try_recv(&self) -> Option<ScoreEvent> {
        self.receiver.try_recv().ok()
    }

    /// Number of pending events.
    #[inline]
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    /// Checks if there are pending events.
    #[inline]
    #[must_use]
    pub fn has_events(&self) -> bool {
        !self.receiver.is_empty()
    }
}
