use crate::contract::ResponseCode;
use crate::phase::RidePhase;
use crate::resolution::RequiredField;

/// Conditions reported back to the host through a response code.
#[derive(Debug, Clone, PartialEq)]
pub enum IntentError {
    /// A required field is missing; the host should re-prompt for it.
    NeedsInput(RequiredField),
    NotFound(String),
    Unavailable(String),
    InvalidState { from: RidePhase, to: RidePhase },
    MalformedLocation(String),
    MalformedIntent(String),
}

impl IntentError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NeedsInput(_) => "needs_input",
            Self::NotFound(_) => "not_found",
            Self::Unavailable(_) => "unavailable",
            Self::InvalidState { .. } => "invalid_state",
            Self::MalformedLocation(_) => "malformed_location",
            Self::MalformedIntent(_) => "malformed_intent",
        }
    }

    pub fn code(&self) -> ResponseCode {
        match self {
            Self::NeedsInput(_) => ResponseCode::NeedsValue,
            _ => ResponseCode::Failure,
        }
    }
}

impl std::fmt::Display for IntentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NeedsInput(field) => write!(f, "{} is required", field.as_str()),
            Self::NotFound(ride_identifier) => write!(f, "ride '{ride_identifier}' was not found"),
            Self::Unavailable(reason) => write!(f, "ride service unavailable: {reason}"),
            Self::InvalidState { from, to } => write!(
                f,
                "ride cannot move from {} to {}",
                from.as_str(),
                to.as_str()
            ),
            Self::MalformedLocation(reason) => write!(f, "malformed location: {reason}"),
            Self::MalformedIntent(reason) => write!(f, "malformed intent: {reason}"),
        }
    }
}

impl std::error::Error for IntentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_maps_to_needs_value() {
        let error = IntentError::NeedsInput(RequiredField::DropOffLocation);
        assert_eq!(error.code(), ResponseCode::NeedsValue);
        assert_eq!(error.to_string(), "drop_off_location is required");
    }

    #[test]
    fn other_conditions_map_to_failure() {
        let errors = [
            IntentError::NotFound("abc123".to_string()),
            IntentError::Unavailable("no backend".to_string()),
            IntentError::InvalidState {
                from: RidePhase::Confirmed,
                to: RidePhase::Confirmed,
            },
            IntentError::MalformedLocation("bad".to_string()),
            IntentError::MalformedIntent("bad".to_string()),
        ];

        for error in errors {
            assert_eq!(error.code(), ResponseCode::Failure, "{}", error.kind());
        }
    }
}
