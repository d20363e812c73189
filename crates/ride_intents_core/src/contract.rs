use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::IntentError;
use crate::phase::RidePhase;
use crate::resolution::PlacemarkResolution;

/// Result code carried by every response envelope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCode {
    Success,
    Failure,
    NeedsValue,
}

impl ResponseCode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::NeedsValue => "needs_value",
        }
    }
}

/// A point on the globe, in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Rejects non-finite or out-of-range degrees.
    pub fn validate(&self) -> Result<(), IntentError> {
        h3o::LatLng::new(self.latitude, self.longitude).map_err(|error| {
            IntentError::MalformedLocation(format!(
                "({}, {}) is not a valid coordinate: {error}",
                self.latitude, self.longitude
            ))
        })?;
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(IntentError::MalformedLocation(format!(
                "latitude {} is outside [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(IntentError::MalformedLocation(format!(
                "longitude {} is outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Placemark {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
}

impl Placemark {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: Some(name.into()),
            coordinate: Some(coordinate),
        }
    }

    pub fn validate(&self) -> Result<(), IntentError> {
        match &self.coordinate {
            Some(coordinate) => coordinate.validate(),
            None => Ok(()),
        }
    }
}

/// Pickup and drop-off as the user has stated them so far.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RideRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<Placemark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_off_location: Option<Placemark>,
}

impl RideRequest {
    pub fn new(pickup_location: Option<Placemark>, drop_off_location: Option<Placemark>) -> Self {
        Self {
            pickup_location,
            drop_off_location,
        }
    }

    pub fn validate(&self) -> Result<(), IntentError> {
        for placemark in [&self.pickup_location, &self.drop_off_location]
            .into_iter()
            .flatten()
        {
            placemark.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetRideStatusIntent {}

/// Cancellation and feedback accept any payload; unusable fields fall back
/// to empty values instead of rejecting the intent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Value")]
pub struct CancelRideIntent {
    pub ride_identifier: String,
}

impl From<Value> for CancelRideIntent {
    fn from(value: Value) -> Self {
        Self {
            ride_identifier: lenient_identifier(value.get("ride_identifier")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tip {
    pub amount: f64,
    pub currency_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Value")]
pub struct SendRideFeedbackIntent {
    pub ride_identifier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<Tip>,
}

impl From<Value> for SendRideFeedbackIntent {
    fn from(value: Value) -> Self {
        Self {
            ride_identifier: lenient_identifier(value.get("ride_identifier")),
            rating: value
                .get("rating")
                .and_then(Value::as_u64)
                .and_then(|rating| u8::try_from(rating).ok()),
            tip: value
                .get("tip")
                .cloned()
                .and_then(|tip| serde_json::from_value(tip).ok()),
        }
    }
}

fn lenient_identifier(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Every intent kind the host can deliver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "intent", rename_all = "snake_case")]
pub enum Intent {
    CancelRide(CancelRideIntent),
    SendRideFeedback(SendRideFeedbackIntent),
    GetRideStatus(GetRideStatusIntent),
    ListRideOptions(RideRequest),
    RequestRide(RideRequest),
    ResolvePickupLocation(RideRequest),
    ResolveDropOffLocation(RideRequest),
    StartSendingUpdates(GetRideStatusIntent),
    StopSendingUpdates(GetRideStatusIntent),
}

impl Intent {
    pub const KINDS: [&'static str; 9] = [
        "cancel_ride",
        "send_ride_feedback",
        "get_ride_status",
        "list_ride_options",
        "request_ride",
        "resolve_pickup_location",
        "resolve_drop_off_location",
        "start_sending_updates",
        "stop_sending_updates",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            Self::CancelRide(_) => "cancel_ride",
            Self::SendRideFeedback(_) => "send_ride_feedback",
            Self::GetRideStatus(_) => "get_ride_status",
            Self::ListRideOptions(_) => "list_ride_options",
            Self::RequestRide(_) => "request_ride",
            Self::ResolvePickupLocation(_) => "resolve_pickup_location",
            Self::ResolveDropOffLocation(_) => "resolve_drop_off_location",
            Self::StartSendingUpdates(_) => "start_sending_updates",
            Self::StopSendingUpdates(_) => "stop_sending_updates",
        }
    }

    /// Checks every coordinate the intent carries.
    pub fn validate(&self) -> Result<(), IntentError> {
        match self {
            Self::ListRideOptions(request)
            | Self::RequestRide(request)
            | Self::ResolvePickupLocation(request)
            | Self::ResolveDropOffLocation(request) => request.validate(),
            Self::CancelRide(_)
            | Self::SendRideFeedback(_)
            | Self::GetRideStatus(_)
            | Self::StartSendingUpdates(_)
            | Self::StopSendingUpdates(_) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RideOption {
    pub name: String,
    pub estimated_pickup_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer_message: Option<String>,
}

impl RideOption {
    pub fn new(name: impl Into<String>, estimated_pickup_date: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            estimated_pickup_date,
            disclaimer_message: None,
        }
    }

    pub fn with_disclaimer(mut self, message: impl Into<String>) -> Self {
        self.disclaimer_message = Some(message.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub map_annotation_image: ImageRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RideStatus {
    pub ride_identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location: Option<Placemark>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_off_location: Option<Placemark>,
    pub phase: RidePhase,
    pub estimated_pickup_date: DateTime<Utc>,
    pub vehicle: Vehicle,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AckResponse {
    pub code: ResponseCode,
}

impl AckResponse {
    pub fn success() -> Self {
        Self {
            code: ResponseCode::Success,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GetRideStatusResponse {
    pub code: ResponseCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ride_status: Option<RideStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListRideOptionsResponse {
    pub code: ResponseCode,
    pub ride_options: Vec<RideOption>,
    pub expiration_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequestRideResponse {
    pub code: ResponseCode,
    pub ride_status: RideStatus,
}

/// One response per intent, tagged like the intent that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "response", rename_all = "snake_case")]
pub enum IntentResponse {
    CancelRide(AckResponse),
    SendRideFeedback(AckResponse),
    GetRideStatus(GetRideStatusResponse),
    ListRideOptions(ListRideOptionsResponse),
    RequestRide(RequestRideResponse),
    ResolvePickupLocation(PlacemarkResolution),
    ResolveDropOffLocation(PlacemarkResolution),
    StartSendingUpdates(AckResponse),
    StopSendingUpdates(AckResponse),
}

impl IntentResponse {
    pub fn code(&self) -> ResponseCode {
        match self {
            Self::CancelRide(response)
            | Self::SendRideFeedback(response)
            | Self::StartSendingUpdates(response)
            | Self::StopSendingUpdates(response) => response.code,
            Self::GetRideStatus(response) => response.code,
            Self::ListRideOptions(response) => response.code,
            Self::RequestRide(response) => response.code,
            Self::ResolvePickupLocation(resolution) | Self::ResolveDropOffLocation(resolution) => {
                resolution.code()
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::CancelRide(_) => "cancel_ride",
            Self::SendRideFeedback(_) => "send_ride_feedback",
            Self::GetRideStatus(_) => "get_ride_status",
            Self::ListRideOptions(_) => "list_ride_options",
            Self::RequestRide(_) => "request_ride",
            Self::ResolvePickupLocation(_) => "resolve_pickup_location",
            Self::ResolveDropOffLocation(_) => "resolve_drop_off_location",
            Self::StartSendingUpdates(_) => "start_sending_updates",
            Self::StopSendingUpdates(_) => "stop_sending_updates",
        }
    }
}
