//! # RIFT Core - Pool Subsystem
//!
//! Pre-allocated, reusable game-entity pools:
//! - Every pool member is built once, at pool creation
//! - Spawn and return never allocate or destroy
//! - Occupancy is deterministic and cheap to query
//!
//! ## Architecture Rules
//!
//! 1. **Fixed capacity** - pools never grow; memory predictability wins
//! 2. **Deterministic spawn order** - lowest-index inactive member, always
//! 3. **Exhaustion is not an error** - callers branch on it and skip
//!
//! ## Example
//!
//! ```rust,ignore
//! use rift_core::{PoolDescriptor, PoolRegistry};
//!
//! let mut registry = PoolRegistry::from_descriptors(descriptors);
//! let id = registry.get_by_name("scoreMultipliers").unwrap();
//! let pool = registry.pool_mut(id).unwrap();
//! if let Some(ticket) = pool.spawn(args) {
//!     // ... later, from anywhere that holds the ticket:
//!     pool.reclaim(ticket)?;
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod descriptor;
pub mod error;
pub mod pool;
pub mod poolable;
pub mod registry;

pub use descriptor::PoolDescriptor;
pub use error::{PoolError, PoolResult};
pub use pool::{Pool, PoolId};
pub use poolable::{PoolTicket, Poolable};
pub use registry::{PoolRegistry, FALLBACK_CAPACITY, FALLBACK_PREFIX};
