//! # Pool Error Types
//!
//! All errors that can occur in the pool subsystem.
//!
//! Exhaustion is deliberately absent: a pool with no inactive members is a
//! normal runtime condition and is signaled through `Option`, never through
//! this enum. The same goes for name lookups that find nothing.

use crate::pool::PoolId;
use thiserror::Error;

/// Errors that can occur in the pool subsystem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// A pool was configured with a capacity of zero.
    #[error("pool '{name}' must have a capacity greater than zero")]
    ZeroCapacity {
        /// Name of the offending pool.
        name: String,
    },

    /// A pool descriptor failed validation.
    #[error("invalid pool descriptor '{name}': {reason}")]
    InvalidDescriptor {
        /// Name of the offending descriptor (may be empty).
        name: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A ticket was returned to a pool it does not belong to.
    ///
    /// This indicates a caller bug: returning a foreign ticket would corrupt
    /// the occupancy count of the receiving pool.
    #[error("ticket from {ticket_pool} returned to pool '{pool}' ({pool_id})")]
    ForeignTicket {
        /// Name of the pool that received the ticket.
        pool: String,
        /// Identity of the pool that received the ticket.
        pool_id: PoolId,
        /// Identity of the pool the ticket actually belongs to.
        ticket_pool: PoolId,
    },
}

/// Result type for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;
