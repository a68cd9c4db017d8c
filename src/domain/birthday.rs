//! Birthday proximity classification.
//!
//! Splits a list of stars into those whose birthday (month and day, year
//! ignored) falls today, tomorrow or the day after tomorrow relative to an
//! explicit reference date. The reference date is always passed in; nothing
//! here reads the system clock.

use chrono::{Datelike, Days, NaiveDate};
use serde_json::json;

use crate::domain::entities::Star;
use crate::error::AppError;

/// Year-agnostic (month, day) pair used to compare birthdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateProbe {
    month: u32,
    day: u32,
}

impl DateProbe {
    /// Builds a probe from raw parts.
    ///
    /// February 29 is accepted: it is a valid birthday even though the probe
    /// only occurs naturally in leap years.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] when the month is outside 1..=12 or
    /// the day does not exist in that month.
    pub fn new(month: u32, day: u32) -> Result<Self, AppError> {
        // 2000 is a leap year, so Feb 29 validates.
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(AppError::invalid_input(
                "Invalid month/day combination",
                json!({ "month": month, "day": day }),
            ));
        }
        Ok(Self { month, day })
    }

    /// Probe for the month and day of `date`.
    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Whether `date` falls on this probe in any year.
    pub fn matches<D: Datelike>(&self, date: &D) -> bool {
        date.month() == self.month && date.day() == self.day
    }
}

/// Which of the three highlighted days a birthday falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayBucket {
    Today,
    Tomorrow,
    DayAfterTomorrow,
}

/// The three consecutive days starting at a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    pub today: NaiveDate,
    pub tomorrow: NaiveDate,
    pub day_after_tomorrow: NaiveDate,
}

impl BirthdayWindow {
    /// Computes the window using calendar arithmetic, so Dec 31 rolls over to
    /// Jan 1 of the next year.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if the window runs past the last
    /// representable date.
    pub fn starting(reference: NaiveDate) -> Result<Self, AppError> {
        let shift = |days: u64| {
            reference.checked_add_days(Days::new(days)).ok_or_else(|| {
                AppError::invalid_input(
                    "Reference date is out of range",
                    json!({ "reference": reference.to_string() }),
                )
            })
        };

        Ok(Self {
            today: reference,
            tomorrow: shift(1)?,
            day_after_tomorrow: shift(2)?,
        })
    }

    /// Places a birth date into a bucket.
    ///
    /// Probes are checked in the order today, tomorrow, day after tomorrow and
    /// the first match wins, so a date lands in at most one bucket.
    pub fn bucket_of(&self, birth_date: &NaiveDate) -> Option<BirthdayBucket> {
        [
            (self.today, BirthdayBucket::Today),
            (self.tomorrow, BirthdayBucket::Tomorrow),
            (self.day_after_tomorrow, BirthdayBucket::DayAfterTomorrow),
        ]
        .into_iter()
        .find(|(day, _)| DateProbe::of(day).matches(birth_date))
        .map(|(_, bucket)| bucket)
    }
}

/// Stars grouped by upcoming birthday. Each list keeps the input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthdayBuckets {
    pub today: Vec<Star>,
    pub tomorrow: Vec<Star>,
    pub day_after_tomorrow: Vec<Star>,
}

impl BirthdayBuckets {
    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.tomorrow.is_empty() && self.day_after_tomorrow.is_empty()
    }
}

/// Classifies `stars` by birthday relative to `reference`.
///
/// Stars whose birthday falls outside the three-day window are left out.
/// A Feb 29 birthday only matches when the window itself contains Feb 29.
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] if the window cannot be computed for
/// `reference`.
pub fn classify(stars: &[Star], reference: NaiveDate) -> Result<BirthdayBuckets, AppError> {
    let window = BirthdayWindow::starting(reference)?;
    Ok(classify_in(&window, stars))
}

/// Classifies `stars` against an already computed window.
pub fn classify_in(window: &BirthdayWindow, stars: &[Star]) -> BirthdayBuckets {
    let mut buckets = BirthdayBuckets::default();

    for star in stars {
        match window.bucket_of(&star.birth_date) {
            Some(BirthdayBucket::Today) => buckets.today.push(star.clone()),
            Some(BirthdayBucket::Tomorrow) => buckets.tomorrow.push(star.clone()),
            Some(BirthdayBucket::DayAfterTomorrow) => {
                buckets.day_after_tomorrow.push(star.clone())
            }
            None => {}
        }
    }

    buckets
}
