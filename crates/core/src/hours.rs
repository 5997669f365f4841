//! # Opening Hours
//!
//! Evaluates a canteen's weekly schedule against a reference instant.
//!
//! Three inputs decide whether a canteen is open:
//!
//! 1. the owner's manual switch (`Canteen::is_open`), which can only force closure;
//! 2. one-off closed dates, matched on calendar date alone;
//! 3. the shifts of the current weekday, where a shift whose end is earlier
//!    than its start wraps through midnight.
//!
//! All functions are pure. The reference instant is a local wall-clock time
//! supplied by the caller, usually from a [`crate::clock::Clock`].

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::models::canteen::Canteen;
use crate::models::schedule::{ClockTime, DayOfWeek, Schedule, Shift};

/// Displayed hours for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayHours<'a> {
    /// The date is listed among the schedule's closed dates.
    SpecialClosure,
    /// No shifts are configured for the weekday.
    Closed,
    Open(&'a [Shift]),
}

impl fmt::Display for DayHours<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayHours::SpecialClosure => f.write_str("Closed today (Special)"),
            DayHours::Closed => f.write_str("Closed today"),
            DayHours::Open(shifts) => {
                let ranges: Vec<String> = shifts.iter().map(format_shift).collect();
                f.write_str(&ranges.join(", "))
            }
        }
    }
}

/// `"9:00 AM - 1:00 PM"`
pub fn format_shift(shift: &Shift) -> String {
    format!("{} - {}", shift.start.to_12_hour(), shift.end.to_12_hour())
}

/// True when any closed date falls on `date`, whatever its time of day or reason.
pub fn is_closed_on_date(schedule: &Schedule, date: NaiveDate) -> bool {
    schedule
        .closed_dates
        .iter()
        .any(|closed| closed.date.date() == date)
}

/// Today's hours as shown on listing cards and detail pages.
///
/// A closed date takes precedence over the regular hours for every caller.
pub fn current_day_hours(schedule: &Schedule, now: NaiveDateTime) -> DayHours<'_> {
    if is_closed_on_date(schedule, now.date()) {
        return DayHours::SpecialClosure;
    }

    match schedule.day(DayOfWeek::from(now.weekday())) {
        Some(entry) if !entry.shifts.is_empty() => DayHours::Open(&entry.shifts),
        _ => DayHours::Closed,
    }
}

pub fn current_day_hours_text(schedule: &Schedule, now: NaiveDateTime) -> String {
    current_day_hours(schedule, now).to_string()
}

/// Whether the canteen is open at `now`.
pub fn is_open_now(canteen: &Canteen, now: NaiveDateTime) -> bool {
    if !canteen.is_open {
        return false;
    }

    let schedule = &canteen.schedule;
    if is_closed_on_date(schedule, now.date()) {
        return false;
    }

    let Some(today) = schedule.day(DayOfWeek::from(now.weekday())) else {
        return false;
    };

    let Some(current) = ClockTime::new(now.hour(), now.minute()) else {
        return false;
    };

    let open = today.shifts.iter().any(|shift| shift.covers(current));
    tracing::trace!(
        "Open check: canteen={}, day={}, time={}, open={}",
        canteen.id,
        today.day,
        current,
        open
    );
    open
}

/// The regular hours of every weekday, Monday first. Closed dates are not applied.
pub fn weekly_hours(schedule: &Schedule) -> Vec<(DayOfWeek, DayHours<'_>)> {
    DayOfWeek::ALL
        .into_iter()
        .map(|day| {
            let hours = match schedule.day(day) {
                Some(entry) if !entry.shifts.is_empty() => DayHours::Open(&entry.shifts),
                _ => DayHours::Closed,
            };
            (day, hours)
        })
        .collect()
}
