//! Ride lifecycle phases and the transitions allowed between them.
//!
//! `Requested -> Confirmed -> (Ongoing -> Completed | Cancelled)`; a confirmed
//! ride may also be cancelled before it starts.

use serde::{Deserialize, Serialize};

use crate::error::IntentError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RidePhase {
    Requested,
    Confirmed,
    Ongoing,
    Completed,
    Cancelled,
}

impl RidePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Requested => "requested",
            Self::Confirmed => "confirmed",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn can_transition_to(self, next: RidePhase) -> bool {
        matches!(
            (self, next),
            (Self::Requested, Self::Confirmed)
                | (Self::Confirmed, Self::Ongoing)
                | (Self::Confirmed, Self::Cancelled)
                | (Self::Ongoing, Self::Completed)
                | (Self::Ongoing, Self::Cancelled)
        )
    }

    pub fn transition(self, next: RidePhase) -> Result<RidePhase, IntentError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(IntentError::InvalidState {
                from: self,
                to: next,
            })
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requested_ride_can_be_confirmed() {
        assert_eq!(
            RidePhase::Requested.transition(RidePhase::Confirmed),
            Ok(RidePhase::Confirmed)
        );
    }

    #[test]
    fn confirming_twice_is_an_invalid_state() {
        let error = RidePhase::Confirmed
            .transition(RidePhase::Confirmed)
            .expect_err("second confirmation should fail");
        assert_eq!(
            error,
            IntentError::InvalidState {
                from: RidePhase::Confirmed,
                to: RidePhase::Confirmed,
            }
        );
    }

    #[test]
    fn terminal_phases_accept_no_transition() {
        let all = [
            RidePhase::Requested,
            RidePhase::Confirmed,
            RidePhase::Ongoing,
            RidePhase::Completed,
            RidePhase::Cancelled,
        ];
        for terminal in [RidePhase::Completed, RidePhase::Cancelled] {
            assert!(terminal.is_terminal());
            for next in all {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn ride_cannot_skip_confirmation() {
        assert!(!RidePhase::Requested.can_transition_to(RidePhase::Ongoing));
        assert!(!RidePhase::Requested.can_transition_to(RidePhase::Completed));
        assert!(RidePhase::Confirmed.can_transition_to(RidePhase::Cancelled));
        assert!(RidePhase::Ongoing.can_transition_to(RidePhase::Completed));
    }
}
