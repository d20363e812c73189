//! Single-shot completion delivery.
//!
//! Every submitted event is answered through its own oneshot channel, which
//! fires exactly once. A host that stops waiting just drops the receiver and
//! the late reply is discarded.

use ride_intents_core::clock::Clock;
use ride_intents_core::contract::ResponseCode;
use ride_intents_core::responder::IntentResponder;
use serde_json::{json, Value};
use tokio::sync::oneshot;

use crate::adapters::observer::LoggingObserver;
use crate::handlers::intent::{
    handle_intent_event, log_host_warning, parse_event_line, HostReply, UNKNOWN_KIND,
};

pub struct IntentHost<C: Clock> {
    responder: IntentResponder<C>,
    observer: LoggingObserver,
}

impl<C: Clock> IntentHost<C> {
    pub fn new(responder: IntentResponder<C>) -> Self {
        Self {
            responder,
            observer: LoggingObserver,
        }
    }

    pub fn responder(&self) -> &IntentResponder<C> {
        &self.responder
    }

    pub fn submit(&self, event: Value) -> oneshot::Receiver<HostReply> {
        let (completion, receiver) = oneshot::channel();
        self.complete(event, completion);
        receiver
    }

    /// Answers one stdin line. Blank lines yield `None`.
    pub async fn reply_for_line(&self, line: &str) -> Option<HostReply> {
        let event = match parse_event_line(line)? {
            Ok(event) => event,
            Err(reply) => return Some(reply),
        };
        match self.submit(event).await {
            Ok(reply) => Some(reply),
            Err(error) => Some(HostReply {
                code: ResponseCode::Failure,
                kind: UNKNOWN_KIND.to_string(),
                body: json!({
                    "error": "completion_dropped",
                    "message": error.to_string(),
                }),
            }),
        }
    }

    /// Answers `event` through `completion`, consuming it.
    pub fn complete(&self, event: Value, completion: oneshot::Sender<HostReply>) {
        let reply = handle_intent_event(event, &self.responder, &self.observer);
        let kind = reply.kind.clone();
        if completion.send(reply).is_err() {
            log_host_warning("completion_dropped", json!({ "kind": kind }));
        }
    }
}
