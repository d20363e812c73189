//! Stateless intent responder.
//!
//! Each operation turns one intent into one fully built response. Nothing is
//! looked up or stored: ride data is fabricated from [`ResponderConfig`] and
//! the responder's [`Clock`].

use crate::clock::{Clock, SystemClock};
use crate::contract::{
    AckResponse, CancelRideIntent, GetRideStatusIntent, GetRideStatusResponse, ImageRef, Intent,
    IntentResponse, ListRideOptionsResponse, RequestRideResponse, ResponseCode, RideOption,
    RideRequest, RideStatus, SendRideFeedbackIntent, Vehicle,
};
use crate::phase::RidePhase;
use crate::resolution::{resolve_field, PlacemarkResolution, RequiredField};
use crate::updates::{self, RideStatusObserver};

pub const DEFAULT_RIDE_IDENTIFIER: &str = "abc123";
pub const DEFAULT_VEHICLE_ICON_URL: &str = "https://w7.pngwing.com/pngs/492/796/png-transparent-bmw-m5-car-bmw-x5-2018-bmw-5-series-bmw-sedan-car-performance-car.png";
pub const DEFAULT_PICKUP_OFFSET_SECS: i64 = 900;
pub const DEFAULT_OPTIONS_TTL_SECS: i64 = 3600;

pub const FERRARI_DISCLAIMER: &str = "This vehicle is bad for the environment";

/// Fixed ride options as `(name, pickup offset in seconds, disclaimer)`, in
/// listing order.
pub const RIDE_OPTION_CATALOG: [(&str, i64, Option<&str>); 3] = [
    ("Mini Cooper", 1000, None),
    ("Honda Accord", 800, None),
    ("Ferrari F430", 300, Some(FERRARI_DISCLAIMER)),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponderConfig {
    pub ride_identifier: String,
    pub vehicle_icon_url: String,
    pub pickup_offset_secs: i64,
    pub options_ttl_secs: i64,
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            ride_identifier: DEFAULT_RIDE_IDENTIFIER.to_string(),
            vehicle_icon_url: DEFAULT_VEHICLE_ICON_URL.to_string(),
            pickup_offset_secs: DEFAULT_PICKUP_OFFSET_SECS,
            options_ttl_secs: DEFAULT_OPTIONS_TTL_SECS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IntentResponder<C: Clock = SystemClock> {
    config: ResponderConfig,
    clock: C,
}

impl IntentResponder<SystemClock> {
    pub fn new(config: ResponderConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> IntentResponder<C> {
    pub fn with_clock(config: ResponderConfig, clock: C) -> Self {
        Self { config, clock }
    }

    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    /// Routes one intent to its operation.
    pub fn handle(&self, intent: Intent, observer: &dyn RideStatusObserver) -> IntentResponse {
        match intent {
            Intent::CancelRide(intent) => IntentResponse::CancelRide(self.cancel_ride(&intent)),
            Intent::SendRideFeedback(intent) => {
                IntentResponse::SendRideFeedback(self.send_ride_feedback(&intent))
            }
            Intent::GetRideStatus(intent) => {
                IntentResponse::GetRideStatus(self.get_ride_status(&intent))
            }
            Intent::ListRideOptions(request) => {
                IntentResponse::ListRideOptions(self.list_ride_options(&request))
            }
            Intent::RequestRide(request) => IntentResponse::RequestRide(self.request_ride(&request)),
            Intent::ResolvePickupLocation(request) => {
                IntentResponse::ResolvePickupLocation(self.resolve_pickup_location(&request))
            }
            Intent::ResolveDropOffLocation(request) => {
                IntentResponse::ResolveDropOffLocation(self.resolve_drop_off_location(&request))
            }
            Intent::StartSendingUpdates(intent) => {
                self.start_sending_updates(&intent, observer);
                IntentResponse::StartSendingUpdates(AckResponse::success())
            }
            Intent::StopSendingUpdates(intent) => {
                self.stop_sending_updates(&intent);
                IntentResponse::StopSendingUpdates(AckResponse::success())
            }
        }
    }

    // Cancellation is not checked against any ride.
    pub fn cancel_ride(&self, _intent: &CancelRideIntent) -> AckResponse {
        AckResponse::success()
    }

    pub fn send_ride_feedback(&self, _intent: &SendRideFeedbackIntent) -> AckResponse {
        AckResponse::success()
    }

    pub fn get_ride_status(&self, _intent: &GetRideStatusIntent) -> GetRideStatusResponse {
        GetRideStatusResponse {
            code: ResponseCode::Success,
            ride_status: None,
        }
    }

    pub fn resolve_pickup_location(&self, request: &RideRequest) -> PlacemarkResolution {
        resolve_field(request, RequiredField::PickupLocation)
    }

    pub fn resolve_drop_off_location(&self, request: &RideRequest) -> PlacemarkResolution {
        resolve_field(request, RequiredField::DropOffLocation)
    }

    pub fn list_ride_options(&self, _request: &RideRequest) -> ListRideOptionsResponse {
        let ride_options = RIDE_OPTION_CATALOG
            .iter()
            .map(|(name, offset_secs, disclaimer)| {
                let option = RideOption::new(*name, self.clock.seconds_from_now(*offset_secs));
                match disclaimer {
                    Some(message) => option.with_disclaimer(*message),
                    None => option,
                }
            })
            .collect();

        ListRideOptionsResponse {
            code: ResponseCode::Success,
            ride_options,
            expiration_date: self.clock.seconds_from_now(self.config.options_ttl_secs),
        }
    }

    /// Confirms the ride the user agreed on. Resolution is not re-checked.
    pub fn request_ride(&self, request: &RideRequest) -> RequestRideResponse {
        let vehicle = Vehicle {
            map_annotation_image: ImageRef {
                url: self.config.vehicle_icon_url.clone(),
            },
            // Parked at the destination so it shows up away from the rider.
            location: request
                .drop_off_location
                .as_ref()
                .and_then(|placemark| placemark.coordinate),
        };

        let ride_status = RideStatus {
            ride_identifier: self.config.ride_identifier.clone(),
            pickup_location: request.pickup_location.clone(),
            drop_off_location: request.drop_off_location.clone(),
            phase: RidePhase::Confirmed,
            estimated_pickup_date: self.clock.seconds_from_now(self.config.pickup_offset_secs),
            vehicle,
        };

        RequestRideResponse {
            code: ResponseCode::Success,
            ride_status,
        }
    }

    pub fn start_sending_updates(
        &self,
        intent: &GetRideStatusIntent,
        observer: &dyn RideStatusObserver,
    ) {
        updates::start_sending_updates(intent, observer);
    }

    pub fn stop_sending_updates(&self, intent: &GetRideStatusIntent) {
        updates::stop_sending_updates(intent);
    }
}
