//! # Pool Registry
//!
//! The registry owns every pool of a session and indexes them two ways:
//! by unique name, and by prototype identity. It is created where the
//! session is assembled and handed to consumers explicitly — there is no
//! global accessor.
//!
//! Startup is descriptor-driven: the registry walks a list of
//! [`PoolDescriptor`]s and creates a pool for every valid entry. One bad
//! entry is skipped with a diagnostic; it never aborts startup.

use crate::descriptor::PoolDescriptor;
use crate::error::PoolResult;
use crate::pool::{Pool, PoolId};
use crate::poolable::Poolable;

/// Capacity of pools auto-created on a prototype miss.
pub const FALLBACK_CAPACITY: usize = 10;

/// Name prefix of pools auto-created on a prototype miss.
pub const FALLBACK_PREFIX: &str = "untracked";

/// Owning index of all pools for one session.
pub struct PoolRegistry<T: Poolable> {
    /// All registered pools; a [`PoolId`] is an index into this.
    pools: Vec<Pool<T>>,
    /// Capacity used for auto-created fallback pools.
    fallback_capacity: usize,
    /// Counter feeding unique fallback-pool names.
    fallback_count: u32,
}

impl<T: Poolable> PoolRegistry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pools: Vec::new(),
            fallback_capacity: FALLBACK_CAPACITY,
            fallback_count: 0,
        }
    }

    /// Overrides the capacity used for auto-created fallback pools.
    ///
    /// Clamped to at least one member.
    #[must_use]
    pub fn with_fallback_capacity(mut self, capacity: usize) -> Self {
        self.fallback_capacity = capacity.max(1);
        self
    }

    /// Builds a registry from a descriptor list.
    ///
    /// Every valid descriptor produces a pool. Invalid entries are skipped
    /// with a diagnostic; startup proceeds with the rest.
    #[must_use]
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = PoolDescriptor<T::Prototype>>,
    ) -> Self {
        let mut registry = Self::new();
        for descriptor in descriptors {
            if let Err(err) = registry.create_pool(descriptor) {
                tracing::warn!("skipping pool descriptor: {err}");
            }
        }
        registry
    }

    /// Validates a descriptor and registers its pool.
    ///
    /// If a pool with the descriptor's name already exists, the conflict is
    /// non-fatal: a diagnostic is emitted and the *existing* pool's id is
    /// returned unchanged. Callers must not assume a new pool was created.
    ///
    /// # Errors
    ///
    /// Configuration errors from descriptor validation
    /// ([`PoolError::InvalidDescriptor`], [`PoolError::ZeroCapacity`]).
    pub fn create_pool(&mut self, descriptor: PoolDescriptor<T::Prototype>) -> PoolResult<PoolId> {
        let (name, capacity, prototype) = descriptor.validate()?;
        self.create(&name, capacity, prototype)
    }

    /// Registers a pool from explicit parts.
    ///
    /// Same duplicate-name semantics as [`create_pool`](Self::create_pool).
    ///
    /// # Errors
    ///
    /// [`PoolError::ZeroCapacity`] / [`PoolError::InvalidDescriptor`] on
    /// invalid inputs.
    pub fn create(
        &mut self,
        name: &str,
        capacity: usize,
        prototype: T::Prototype,
    ) -> PoolResult<PoolId> {
        if let Some(existing) = self.get_by_name(name) {
            tracing::warn!("a pool named '{name}' already exists; returning the existing pool");
            return Ok(existing);
        }
        let id = self.next_id();
        let pool = Pool::new(id, name, capacity, prototype)?;
        self.pools.push(pool);
        Ok(id)
    }

    /// Exact-match lookup by name.
    ///
    /// `None` is a normal, expected outcome for optional pools.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<PoolId> {
        self.pools
            .iter()
            .position(|pool| pool.name() == name)
            .map(|index| PoolId::new(index as u32))
    }

    /// Looks up the first pool whose prototype matches.
    ///
    /// On a miss, a fallback pool is auto-created under a unique sentinel
    /// name so ad-hoc spawn requests for untracked prototypes never fail.
    /// The implicit allocation is deliberate but loud: every fallback
    /// creation emits a WARN diagnostic, since it usually means a
    /// descriptor is missing from the configuration.
    pub fn get_by_prototype(&mut self, prototype: &T::Prototype) -> PoolId {
        if let Some(index) = self
            .pools
            .iter()
            .position(|pool| pool.prototype() == prototype)
        {
            return PoolId::new(index as u32);
        }

        let mut name = format!("{FALLBACK_PREFIX}.{}", self.fallback_count);
        while self.get_by_name(&name).is_some() {
            self.fallback_count += 1;
            name = format!("{FALLBACK_PREFIX}.{}", self.fallback_count);
        }
        self.fallback_count += 1;
        tracing::warn!(
            "no pool registered for the requested prototype; auto-creating fallback '{name}' \
             with capacity {}",
            self.fallback_capacity
        );

        let id = self.next_id();
        self.pools
            .push(Pool::build(id, name, self.fallback_capacity, prototype.clone()));
        id
    }

    /// Gets a pool by id.
    #[must_use]
    pub fn pool(&self, id: PoolId) -> Option<&Pool<T>> {
        self.pools.get(id.raw() as usize)
    }

    /// Gets a pool by id, mutably.
    pub fn pool_mut(&mut self, id: PoolId) -> Option<&mut Pool<T>> {
        self.pools.get_mut(id.raw() as usize)
    }

    /// Number of registered pools.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// True iff no pool is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Iterates over all registered pools.
    pub fn iter(&self) -> impl Iterator<Item = &Pool<T>> {
        self.pools.iter()
    }

    /// Id the next registered pool will get.
    fn next_id(&self) -> PoolId {
        PoolId::new(self.pools.len() as u32)
    }
}

impl<T: Poolable> Default for PoolRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
