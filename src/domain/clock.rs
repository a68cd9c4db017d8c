//! Source of "today" for the web layer.

use chrono::{Local, NaiveDate};

/// Provides the current calendar date.
///
/// Handlers ask the clock once per request and pass the date down, so the
/// birthday logic never touches the system time itself.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local-time system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock frozen at a given date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
