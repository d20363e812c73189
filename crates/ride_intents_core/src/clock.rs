use chrono::{DateTime, TimeDelta, Utc};

/// Source of "now" for fabricated timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Saturates at the representable range instead of overflowing.
    fn seconds_from_now(&self, seconds: i64) -> DateTime<Utc> {
        let saturated = if seconds < 0 {
            DateTime::<Utc>::MIN_UTC
        } else {
            DateTime::<Utc>::MAX_UTC
        };
        TimeDelta::try_seconds(seconds)
            .and_then(|delta| self.now().checked_add_signed(delta))
            .unwrap_or(saturated)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn fixed_clock_offsets_from_pinned_instant() {
        let pinned = Utc.with_ymd_and_hms(2020, 7, 17, 12, 0, 0).unwrap();
        let clock = FixedClock::new(pinned);

        assert_eq!(clock.now(), pinned);
        assert_eq!(
            clock.seconds_from_now(900),
            Utc.with_ymd_and_hms(2020, 7, 17, 12, 15, 0).unwrap()
        );
    }

    #[test]
    fn huge_offsets_saturate_instead_of_overflowing() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2020, 7, 17, 12, 0, 0).unwrap());

        assert_eq!(clock.seconds_from_now(i64::MAX), DateTime::<Utc>::MAX_UTC);
        assert_eq!(clock.seconds_from_now(10_000_000_000_000), DateTime::<Utc>::MAX_UTC);
        assert_eq!(clock.seconds_from_now(i64::MIN), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
