use ride_intents_core::contract::GetRideStatusResponse;
use ride_intents_core::updates::RideStatusObserver;
use serde_json::json;

use crate::handlers::intent::log_host_info;

/// Logs any status push it receives.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl RideStatusObserver for LoggingObserver {
    fn ride_status_did_update(&self, response: &GetRideStatusResponse) {
        log_host_info(
            "ride_status_update",
            json!({
                "code": response.code.as_str(),
                "ride_identifier": response
                    .ride_status
                    .as_ref()
                    .map(|status| status.ride_identifier.as_str()),
            }),
        );
    }
}
