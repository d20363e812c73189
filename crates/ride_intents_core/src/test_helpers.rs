//! Test helpers for common test setup and utilities.
//!
//! Shared fixtures so unit and integration tests build requests the same way.

use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};

use crate::clock::FixedClock;
use crate::contract::{Coordinate, GetRideStatusResponse, Placemark};
use crate::responder::{IntentResponder, ResponderConfig};
use crate::updates::RideStatusObserver;

/// The instant every fixed-clock test runs at.
///
/// # Panics
///
/// Panics if the constant date is invalid (should never happen).
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 7, 17, 9, 30, 0)
        .single()
        .expect("test instant should be a valid UTC time")
}

/// Pickup at the San Francisco Ferry Building.
pub fn sample_pickup() -> Placemark {
    Placemark::new("Ferry Building", Coordinate::new(37.7955, -122.3937))
}

/// Drop-off at San Francisco International Airport.
pub fn sample_drop_off() -> Placemark {
    Placemark::new("SFO", Coordinate::new(37.6213, -122.3790))
}

/// Responder with default config whose clock is pinned to [`test_now`].
pub fn fixed_responder() -> IntentResponder<FixedClock> {
    IntentResponder::with_clock(ResponderConfig::default(), FixedClock::new(test_now()))
}

/// Observer that records every push it receives.
#[derive(Debug, Default)]
pub struct CapturingObserver {
    updates: Mutex<Vec<GetRideStatusResponse>>,
}

impl CapturingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<GetRideStatusResponse> {
        self.updates.lock().expect("poisoned mutex").clone()
    }
}

impl RideStatusObserver for CapturingObserver {
    fn ride_status_did_update(&self, response: &GetRideStatusResponse) {
        self.updates
            .lock()
            .expect("poisoned mutex")
            .push(response.clone());
    }
}
