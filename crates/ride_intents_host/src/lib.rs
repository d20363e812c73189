//! Host-facing adapters for the ride intent responder.
//!
//! This crate owns the JSON shape of intent events, their single-shot
//! completion delivery, structured logging, and environment configuration.
//! Ride semantics stay in `ride_intents_core`.

pub mod adapters;
pub mod config;
pub mod handlers;
