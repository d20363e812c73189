//! Resolution step of the booking flow.
//!
//! Each required field of a [`RideRequest`] is resolved on its own. A missing
//! field reports `NeedsValue` so the host re-prompts the user; once every
//! field resolves the host moves on to confirmation. Field order is free.

use serde::{Deserialize, Serialize};

use crate::contract::{Placemark, ResponseCode, RideRequest};
use crate::error::IntentError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    PickupLocation,
    DropOffLocation,
}

impl RequiredField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PickupLocation => "pickup_location",
            Self::DropOffLocation => "drop_off_location",
        }
    }

    fn value_in(self, request: &RideRequest) -> Option<&Placemark> {
        match self {
            Self::PickupLocation => request.pickup_location.as_ref(),
            Self::DropOffLocation => request.drop_off_location.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum PlacemarkResolution {
    Success { placemark: Placemark },
    NeedsValue,
}

impl PlacemarkResolution {
    pub fn code(&self) -> ResponseCode {
        match self {
            Self::Success { .. } => ResponseCode::Success,
            Self::NeedsValue => ResponseCode::NeedsValue,
        }
    }

    pub fn into_result(self, field: RequiredField) -> Result<Placemark, IntentError> {
        match self {
            Self::Success { placemark } => Ok(placemark),
            Self::NeedsValue => Err(IntentError::NeedsInput(field)),
        }
    }
}

pub fn resolve_field(request: &RideRequest, field: RequiredField) -> PlacemarkResolution {
    match field.value_in(request) {
        Some(placemark) => PlacemarkResolution::Success {
            placemark: placemark.clone(),
        },
        None => PlacemarkResolution::NeedsValue,
    }
}

/// A request whose pickup and drop-off have both resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRide {
    pub pickup_location: Placemark,
    pub drop_off_location: Placemark,
}

/// Resolves every required field, reporting the first one still missing.
pub fn resolve_request(request: &RideRequest) -> Result<ResolvedRide, IntentError> {
    let pickup_location = resolve_field(request, RequiredField::PickupLocation)
        .into_result(RequiredField::PickupLocation)?;
    let drop_off_location = resolve_field(request, RequiredField::DropOffLocation)
        .into_result(RequiredField::DropOffLocation)?;
    Ok(ResolvedRide {
        pickup_location,
        drop_off_location,
    })
}
