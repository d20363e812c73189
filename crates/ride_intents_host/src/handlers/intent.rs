use ride_intents_core::clock::Clock;
use ride_intents_core::contract::{Intent, IntentResponse, ResponseCode};
use ride_intents_core::error::IntentError;
use ride_intents_core::resolution::resolve_request;
use ride_intents_core::responder::IntentResponder;
use ride_intents_core::updates::RideStatusObserver;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const UNKNOWN_KIND: &str = "unknown";

/// Reply delivered to the host for exactly one intent event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostReply {
    pub code: ResponseCode,
    pub kind: String,
    pub body: Value,
}

impl HostReply {
    pub fn from_error(kind: &str, error: &IntentError) -> Self {
        Self {
            code: error.code(),
            kind: kind.to_string(),
            body: json!({
                "error": error.kind(),
                "message": error.to_string(),
            }),
        }
    }
}

/// Turns one stdin line into a reply. Blank lines yield `None`.
pub fn parse_event_line(line: &str) -> Option<Result<Value, HostReply>> {
    if line.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(line).map_err(|error| {
        let error = IntentError::MalformedIntent(format!("Malformed JSON line: {error}"));
        log_host_error(
            "intent_rejected",
            json!({
                "error": error.kind(),
                "message": error.to_string(),
            }),
        );
        HostReply::from_error(UNKNOWN_KIND, &error)
    }))
}

pub fn handle_intent_event<C: Clock>(
    event: Value,
    responder: &IntentResponder<C>,
    observer: &dyn RideStatusObserver,
) -> HostReply {
    let recognized_kind = recognized_kind(&event);
    let intent = match decode_intent(event) {
        Ok(value) => value,
        Err(error) => {
            log_host_error(
                "intent_rejected",
                json!({
                    "kind": recognized_kind,
                    "error": error.kind(),
                    "message": error.to_string(),
                }),
            );
            return HostReply::from_error(recognized_kind, &error);
        }
    };

    let kind = intent.kind();
    if let Err(error) = intent.validate() {
        log_host_error(
            "intent_rejected",
            json!({
                "kind": kind,
                "error": error.kind(),
                "message": error.to_string(),
            }),
        );
        return HostReply::from_error(kind, &error);
    }

    if let Intent::RequestRide(request) = &intent {
        if let Err(error) = resolve_request(request) {
            log_host_warning(
                "confirm_without_resolution",
                json!({
                    "error": error.kind(),
                    "message": error.to_string(),
                }),
            );
        }
    }

    let response = responder.handle(intent, observer);
    log_host_info(
        "intent_handled",
        json!({
            "kind": kind,
            "code": response.code().as_str(),
        }),
    );
    reply_from_response(response)
}

/// The event's `kind` tag when it names a known intent, even if its body is unusable.
fn recognized_kind(event: &Value) -> &'static str {
    let tag = event.get("kind").and_then(Value::as_str);
    Intent::KINDS
        .iter()
        .copied()
        .find(|kind| Some(*kind) == tag)
        .unwrap_or(UNKNOWN_KIND)
}

fn decode_intent(event: Value) -> Result<Intent, IntentError> {
    if !event.is_object() {
        return Err(IntentError::MalformedIntent(
            "Intent event must be a JSON object".to_string(),
        ));
    }
    serde_json::from_value::<Intent>(event)
        .map_err(|error| IntentError::MalformedIntent(error.to_string()))
}

fn reply_from_response(response: IntentResponse) -> HostReply {
    let code = response.code();
    let kind = response.kind().to_string();
    match serde_json::to_value(&response) {
        // Adjacent tagging puts the payload under "response".
        Ok(Value::Object(mut object)) => HostReply {
            code,
            kind,
            body: object.remove("response").unwrap_or(Value::Null),
        },
        Ok(other) => HostReply {
            code,
            kind,
            body: other,
        },
        Err(error) => {
            log_host_error(
                "serialization_error",
                json!({
                    "kind": kind,
                    "message": error.to_string(),
                }),
            );
            HostReply {
                code: ResponseCode::Failure,
                kind,
                body: json!({
                    "error": "serialization_error",
                    "message": error.to_string(),
                }),
            }
        }
    }
}

pub(crate) fn log_host_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "intent_host",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

pub(crate) fn log_host_warning(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "intent_host",
            "level": "warn",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

pub(crate) fn log_host_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "intent_host",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
