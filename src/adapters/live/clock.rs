//! Live clock using the system clock.

use chrono::{Local, NaiveDate};

use crate::ports::clock::Clock;

/// Live clock that returns the real current date in the local time zone.
pub struct LiveClock;

impl Clock for LiveClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
