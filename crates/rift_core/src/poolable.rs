//! # The Reusable-Entity Contract
//!
//! Every type that lives in a [`Pool`](crate::Pool) implements [`Poolable`].
//! Members are instantiated once from a prototype when their pool is created,
//! then cycle between inactive and active for the rest of the session.
//!
//! Activated members are referred to by [`PoolTicket`] — a copyable value
//! that records which pool a member belongs to, which slot it occupies, and
//! the activation cycle it was issued for. The ticket is the entity's
//! "return to pool" capability: any holder can hand it back to the owning
//! pool, and a ticket from a finished cycle is simply ignored.

use crate::pool::PoolId;

/// Capability set required of any poolable entity type.
pub trait Poolable {
    /// Template all members of a pool are instantiated from.
    ///
    /// Prototype equality is how the registry answers "which pool serves
    /// this template?", so it must be cheap and meaningful.
    type Prototype: Clone + PartialEq;

    /// Construction-argument bundle accepted on each activation.
    ///
    /// The shape is contract-specific; the pool forwards it opaquely.
    type SpawnArgs;

    /// Builds one member from the prototype.
    ///
    /// Called exactly `capacity` times when a pool is created, never again.
    /// The freshly built member must be in its inactive baseline state.
    fn instantiate(prototype: &Self::Prototype) -> Self;

    /// Called exactly once per activation.
    ///
    /// Must fully re-initialize visible and behavioral state from `args`;
    /// nothing from the previous active cycle may survive.
    fn on_spawn(&mut self, args: Self::SpawnArgs);

    /// Called exactly once when the member is deactivated.
    ///
    /// Must clear state back to the inactive baseline so the next
    /// [`on_spawn`](Poolable::on_spawn) starts clean.
    fn on_return(&mut self);
}

/// Reference to an activated pool member.
///
/// Tickets are issued by [`Pool::spawn`](crate::Pool::spawn) and stay valid
/// for one activation cycle. The generation counter makes stale tickets
/// harmless: once the member is returned (or returned and re-spawned), an
/// old ticket no longer matches and reclaiming through it is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PoolTicket {
    /// Identity of the owning pool.
    pool: PoolId,
    /// Slot index inside the owning pool.
    slot: u32,
    /// Activation cycle this ticket was issued for.
    generation: u32,
}

impl PoolTicket {
    /// Creates a ticket. Only pools issue these.
    pub(crate) const fn new(pool: PoolId, slot: u32, generation: u32) -> Self {
        Self {
            pool,
            slot,
            generation,
        }
    }

    /// Identity of the pool this ticket belongs to.
    #[inline]
    #[must_use]
    pub const fn pool(self) -> PoolId {
        self.pool
    }

    /// Slot index inside the owning pool.
    #[inline]
    #[must_use]
    pub const fn slot(self) -> u32 {
        self.slot
    }

    /// Activation cycle this ticket was issued for.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}
