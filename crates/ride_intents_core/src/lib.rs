//! Ride-booking intent contracts and the stateless responder that answers them.
//!
//! This crate owns the typed intent/response contract, the field resolution
//! step, and the fabricated ride data. It excludes host runtime and I/O
//! concerns; `ride_intents_host` adapts it to JSON intent events.

pub mod clock;
pub mod contract;
pub mod error;
pub mod phase;
pub mod resolution;
pub mod responder;
pub mod updates;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
