//! # Fixed-Capacity Entity Pool
//!
//! A [`Pool`] owns exactly `capacity` members of one poolable type, all
//! built eagerly from a single prototype at construction. Spawning activates
//! the lowest-index inactive member; returning deactivates it again. Members
//! are never created or destroyed after construction, so runtime churn costs
//! no allocation.
//!
//! ## Determinism
//!
//! Spawn order is stable: the lowest-index inactive slot always wins. The
//! scan is bounded by `capacity` in the worst case, and occupancy is tracked
//! in a counter so [`Pool::is_exhausted`] is O(1) for high-frequency polling.
//!
//! ## Thread Safety
//!
//! Pools are mutated from a single frame-driven execution context. There is
//! no interior locking; do not share one across threads.

use crate::error::{PoolError, PoolResult};
use crate::poolable::{PoolTicket, Poolable};

/// Unique identity of a pool for ticket ownership checks.
///
/// The registry assigns these sequentially. Directly constructed pools pick
/// their own; two pools sharing an id defeats foreign-ticket detection, so
/// don't do that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct PoolId(u32);

impl PoolId {
    /// Creates a pool id from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pool#{}", self.0)
    }
}

/// One member slot: the entity plus its occupancy bookkeeping.
#[derive(Debug)]
struct Slot<T> {
    /// The member entity. Lives here for the pool's whole lifetime.
    entity: T,
    /// Activation cycle counter; bumped on every spawn.
    generation: u32,
    /// Whether the member is currently active.
    active: bool,
}

/// A fixed-capacity pool of reusable entities sharing one prototype.
#[derive(Debug)]
pub struct Pool<T: Poolable> {
    /// Identity used for ticket ownership checks.
    id: PoolId,
    /// Registry-unique name.
    name: String,
    /// Template every member was instantiated from. Immutable.
    prototype: T::Prototype,
    /// Exactly `capacity` member slots, fixed at construction.
    slots: Box<[Slot<T>]>,
    /// Number of inactive members eligible for spawn.
    available: usize,
}

impl<T: Poolable> Pool<T> {
    /// Creates a pool and eagerly instantiates all of its members.
    ///
    /// This is the pool's one-time setup; there is no separate init step and
    /// therefore no way to initialize twice.
    ///
    /// # Errors
    ///
    /// [`PoolError::ZeroCapacity`] if `capacity` is zero, and
    /// [`PoolError::InvalidDescriptor`] if `name` is empty.
    pub fn new(
        id: PoolId,
        name: impl Into<String>,
        capacity: usize,
        prototype: T::Prototype,
    ) -> PoolResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(PoolError::InvalidDescriptor {
                name,
                reason: "pool name must not be empty",
            });
        }
        if capacity == 0 {
            return Err(PoolError::ZeroCapacity { name });
        }
        Ok(Self::build(id, name, capacity, prototype))
    }

    /// Builds a pool from already-validated inputs.
    pub(crate) fn build(id: PoolId, name: String, capacity: usize, prototype: T::Prototype) -> Self {
        let slots: Vec<Slot<T>> = (0..capacity)
            .map(|_| Slot {
                entity: T::instantiate(&prototype),
                generation: 0,
                active: false,
            })
            .collect();

        Self {
            id,
            name,
            prototype,
            slots: slots.into_boxed_slice(),
            available: capacity,
        }
    }

    /// Identity of this pool.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Registry-unique name of this pool.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template every member was instantiated from.
    #[inline]
    #[must_use]
    pub const fn prototype(&self) -> &T::Prototype {
        &self.prototype
    }

    /// Total member count, fixed at construction.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of inactive members eligible for spawn.
    #[inline]
    #[must_use]
    pub const fn available(&self) -> usize {
        self.available
    }

    /// Number of currently active members.
    #[inline]
    #[must_use]
    pub fn in_use(&self) -> usize {
        self.capacity() - self.available
    }

    /// True iff no inactive member is available.
    ///
    /// O(1): periodic spawners poll this every tick before attempting a
    /// spawn, so it must not rescan the slots.
    #[inline]
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.available == 0
    }

    /// Activates the lowest-index inactive member.
    ///
    /// The member's `on_spawn` is invoked with `args` and a ticket for the
    /// new activation cycle is returned. `None` is the exhaustion signal:
    /// callers are expected to branch on it (typically by skipping the
    /// spawn attempt), not to treat it as a failure.
    pub fn spawn(&mut self, args: T::SpawnArgs) -> Option<PoolTicket> {
        if self.available == 0 {
            return None;
        }
        let index = self.slots.iter().position(|slot| !slot.active)?;
        let slot = &mut self.slots[index];
        slot.active = true;
        slot.generation = slot.generation.wrapping_add(1);
        slot.entity.on_spawn(args);
        self.available -= 1;

        Some(PoolTicket::new(self.id, index as u32, slot.generation))
    }

    /// Deactivates the member referenced by `ticket`.
    ///
    /// Returns `Ok(true)` if the member was active and has now been returned
    /// (its `on_return` ran), or `Ok(false)` if the ticket's cycle is
    /// already over — returning twice is an idempotent no-op.
    ///
    /// # Errors
    ///
    /// [`PoolError::ForeignTicket`] if the ticket belongs to another pool.
    /// That is a caller bug and is reported loudly rather than silently
    /// corrupting this pool's occupancy count.
    pub fn reclaim(&mut self, ticket: PoolTicket) -> PoolResult<bool> {
        let slot = self.owned_slot_mut(ticket)?;
        if !slot.active || slot.generation != ticket.generation() {
            return Ok(false);
        }
        slot.active = false;
        slot.entity.on_return();
        self.available += 1;
        Ok(true)
    }

    /// Gets a reference to the member behind `ticket`.
    ///
    /// `None` once the ticket's activation cycle is over (or if the ticket
    /// is from another pool).
    #[must_use]
    pub fn get(&self, ticket: PoolTicket) -> Option<&T> {
        let slot = self.slots.get(ticket.slot() as usize)?;
        (ticket.pool() == self.id && slot.active && slot.generation == ticket.generation())
            .then_some(&slot.entity)
    }

    /// Gets a mutable reference to the member behind `ticket`.
    pub fn get_mut(&mut self, ticket: PoolTicket) -> Option<&mut T> {
        let id = self.id;
        let slot = self.slots.get_mut(ticket.slot() as usize)?;
        (ticket.pool() == id && slot.active && slot.generation == ticket.generation())
            .then_some(&mut slot.entity)
    }

    /// Iterates over all active members.
    pub fn iter_active(&self) -> impl Iterator<Item = (PoolTicket, &T)> {
        let id = self.id;
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.active)
            .map(move |(index, slot)| {
                (
                    PoolTicket::new(id, index as u32, slot.generation),
                    &slot.entity,
                )
            })
    }

    /// Iterates mutably over all active members.
    pub fn iter_active_mut(&mut self) -> impl Iterator<Item = (PoolTicket, &mut T)> {
        let id = self.id;
        self.slots
            .iter_mut()
            .enumerate()
            .filter(|(_, slot)| slot.active)
            .map(move |(index, slot)| {
                (
                    PoolTicket::new(id, index as u32, slot.generation),
                    &mut slot.entity,
                )
            })
    }

    /// Resolves a ticket to its slot after the ownership check.
    ///
    /// A well-formed ticket for this pool is always in range; an
    /// out-of-range slot means the pool's id was reused elsewhere, which is
    /// the same caller bug as a wrong id.
    fn owned_slot_mut(&mut self, ticket: PoolTicket) -> PoolResult<&mut Slot<T>> {
        if ticket.pool() != self.id || ticket.slot() as usize >= self.slots.len() {
            return Err(PoolError::ForeignTicket {
                pool: self.name.clone(),
                pool_id: self.id,
                ticket_pool: ticket.pool(),
            });
        }
        Ok(&mut self.slots[ticket.slot() as usize])
    }
}
