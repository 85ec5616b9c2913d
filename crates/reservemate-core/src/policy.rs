// crates/reservemate-core/src/policy.rs - Booking-time rules applied at execution
//
// Whether a reservation may be made for a moment that has already passed is
// a business decision, not a format rule, so it lives outside field
// validation and is switchable from configuration.

use chrono::{Local, NaiveDateTime};

use crate::field::DateTime;

/// Source of "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// Local wall-clock time
    System,
    /// A frozen instant, for tests and replays
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Self::System => Local::now().naive_local(),
            Self::Fixed(instant) => *instant,
        }
    }
}

/// Rules for which date-times add and edit accept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulePolicy {
    pub reject_past: bool,
    pub clock: Clock,
}

impl SchedulePolicy {
    pub fn new(reject_past: bool, clock: Clock) -> Self {
        Self { reject_past, clock }
    }

    /// Accepts any date-time
    pub fn permissive() -> Self {
        Self::new(false, Clock::System)
    }

    /// Whether `date_time` is acceptable for a new or edited booking
    ///
    /// Only a strictly earlier date-time is rejected; the current minute is fine.
    pub fn allows(&self, date_time: &DateTime) -> bool {
        if !self.reject_past {
            return true;
        }
        date_time.value() >= DateTime::from(self.clock.now()).value()
    }
}

impl Default for SchedulePolicy {
    fn default() -> Self {
        Self::new(true, Clock::System)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(raw: &str) -> Clock {
        Clock::Fixed(DateTime::parse(raw).unwrap().value())
    }

    #[test]
    fn test_rejects_past_when_enabled() {
        let policy = SchedulePolicy::new(true, fixed("2025-06-01 1200"));

        assert!(!policy.allows(&DateTime::parse("2025-06-01 1159").unwrap()));
        assert!(policy.allows(&DateTime::parse("2025-06-01 1200").unwrap()));
        assert!(policy.allows(&DateTime::parse("2026-01-01 0000").unwrap()));
    }

    #[test]
    fn test_accepts_past_when_disabled() {
        let policy = SchedulePolicy::new(false, fixed("2025-06-01 1200"));
        assert!(policy.allows(&DateTime::parse("2000-01-01 0000").unwrap()));
        assert!(SchedulePolicy::permissive().allows(&DateTime::parse("1999-12-31 2359").unwrap()));
    }
}
