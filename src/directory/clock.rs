//! Time source used to resolve "today"
//!
//! Business rules around birthdays and absence windows depend on the current
//! date in the server's time zone. The clock is injected so tests can pin it.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Format used for birthday matching
pub const MONTH_DAY_FORMAT: &str = "%m-%d";

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Calendar date of `now` in the given time zone
pub fn today(clock: &dyn Clock, time_zone: Tz) -> NaiveDate {
    clock.now().with_timezone(&time_zone).date_naive()
}

/// `MM-DD` form of a date
pub fn month_day(date: NaiveDate) -> String {
    date.format(MONTH_DAY_FORMAT).to_string()
}
