//! Ride status subscriptions.
//!
//! The host may ask for status pushes about a ride. Nothing changes state
//! here, so subscriptions are accepted and no update is ever delivered.

use crate::contract::{GetRideStatusIntent, GetRideStatusResponse};

/// Receives status pushes for a ride the host is tracking.
pub trait RideStatusObserver {
    fn ride_status_did_update(&self, response: &GetRideStatusResponse);
}

/// Observer for callers that never expect a push.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RideStatusObserver for NoopObserver {
    fn ride_status_did_update(&self, _response: &GetRideStatusResponse) {}
}

pub fn start_sending_updates(_intent: &GetRideStatusIntent, _observer: &dyn RideStatusObserver) {}

pub fn stop_sending_updates(_intent: &GetRideStatusIntent) {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::CapturingObserver;

    #[test]
    fn start_then_stop_pushes_nothing() {
        let observer = CapturingObserver::new();
        let intent = GetRideStatusIntent::default();

        start_sending_updates(&intent, &observer);
        stop_sending_updates(&intent);

        assert!(observer.updates().is_empty());
    }
}
