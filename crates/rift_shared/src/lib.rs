//! # RIFT Shared Types
//!
//! Leaf crate holding what both the pool core's consumers and the gameplay
//! glue need to agree on: flat 3D math and the typed gameplay event
//! vocabulary with its bounded pub/sub bus.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod events;
pub mod math;

pub use events::{EventBus, EventReceiver, EventSender, PlayerId, ScoreEvent};
pub use math::Vec3;
