//! Injectable source of the current time.
//!
//! Everything that depends on "today" (the live aggregate's day, rollover,
//! timestamps on stored rows) reads the time through `Clock` so tests can pin
//! it to a fixed instant.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

pub trait Clock: Send + Sync {
    /// Current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Current UTC calendar day.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Current UTC weekday.
    fn weekday(&self) -> Weekday {
        self.now().weekday()
    }

    /// Whether `day` is the current UTC day.
    fn is_today(&self, day: NaiveDate) -> bool {
        self.today() == day
    }
}

/// Wall clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a settable instant, for tests.
#[cfg(test)]
#[derive(Debug)]
pub struct FixedClock(std::sync::Mutex<DateTime<Utc>>);

#[cfg(test)]
impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(std::sync::Mutex::new(now))
    }

    /// Clock at noon UTC on the given day.
    pub fn at_day(day: NaiveDate) -> Self {
        Self::new(day.and_hms_opt(12, 0, 0).unwrap().and_utc())
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.0.lock().unwrap() = now;
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}
