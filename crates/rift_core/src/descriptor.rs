//! # Pool Descriptors
//!
//! Declarative seed data for pools, typically deserialized from an asset
//! file at configuration time. A descriptor is only *valid* when its
//! capacity is set (and non-zero) and its prototype is present; invalid
//! descriptors are skipped at registry initialization, never silently
//! defaulted.

use crate::error::{PoolError, PoolResult};
use serde::{Deserialize, Serialize};

/// Declarative seed data for one pool.
///
/// `capacity` and `prototype` are optional on purpose: descriptor lists come
/// from serialized assets where entries can be incomplete, and incomplete
/// entries must deserialize fine and then fail validation — not abort the
/// parse.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PoolDescriptor<P> {
    /// Registry-unique pool name.
    pub name: String,
    /// Total member count. Unset means invalid.
    pub capacity: Option<u32>,
    /// Template for the pool's members. Unset means invalid.
    pub prototype: Option<P>,
}

impl<P> PoolDescriptor<P> {
    /// Creates a complete descriptor.
    pub fn new(name: impl Into<String>, capacity: u32, prototype: P) -> Self {
        Self {
            name: name.into(),
            capacity: Some(capacity),
            prototype: Some(prototype),
        }
    }

    /// True iff this descriptor can produce a pool.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && self.capacity.is_some_and(|c| c > 0) && self.prototype.is_some()
    }

    /// Decomposes the descriptor into validated pool inputs.
    ///
    /// # Errors
    ///
    /// [`PoolError::InvalidDescriptor`] naming the first missing piece, or
    /// [`PoolError::ZeroCapacity`] for an explicit zero.
    pub fn validate(self) -> PoolResult<(String, usize, P)> {
        if self.name.is_empty() {
            return Err(PoolError::InvalidDescriptor {
                name: self.name,
                reason: "pool name must not be empty",
            });
        }
        let Some(capacity) = self.capacity else {
            return Err(PoolError::InvalidDescriptor {
                name: self.name,
                reason: "capacity is not set",
            });
        };
        if capacity == 0 {
            return Err(PoolError::ZeroCapacity { name: self.name });
        }
        let Some(prototype) = self.prototype else {
            return Err(PoolError::InvalidDescriptor {
                name: self.name,
                reason: "prototype is missing",
            });
        };
        Ok((self.name, capacity as usize, prototype))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_descriptor_is_valid() {
        let desc = PoolDescriptor::new("bonuses", 5, "proto");
        assert!(desc.is_valid());
        let (name, capacity, prototype) = desc.validate().unwrap();
        assert_eq!(name, "bonuses");
        assert_eq!(capacity, 5);
        assert_eq!(prototype, "proto");
    }

    #[test]
    fn test_incomplete_descriptors_are_invalid() {
        let no_capacity: PoolDescriptor<&str> = PoolDescriptor {
            name: "a".to_owned(),
            capacity: None,
            prototype: Some("proto"),
        };
        assert!(!no_capacity.is_valid());
        assert!(matches!(
            no_capacity.validate(),
            Err(PoolError::InvalidDescriptor {
                reason: "capacity is not set",
                ..
            })
        ));

        let no_prototype: PoolDescriptor<&str> = PoolDescriptor {
            name: "b".to_owned(),
            capacity: Some(3),
            prototype: None,
        };
        assert!(!no_prototype.is_valid());

        let zero: PoolDescriptor<&str> = PoolDescriptor {
            name: "c".to_owned(),
            capacity: Some(0),
            prototype: Some("proto"),
        };
        assert!(!zero.is_valid());
        assert!(matches!(zero.validate(), Err(PoolError::ZeroCapacity { .. })));
    }
}
