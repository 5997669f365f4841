use chrono::{Local, NaiveDateTime};

/// Source of the reference instant for schedule evaluation.
///
/// Instants are naive local date-times: the schedule is written in the
/// canteen's wall-clock time and no time zone is persisted.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local time of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
