use chrono::{Local, NaiveDate};

/// A source of "today". Range resolution reads it once per call, so injecting a
/// fixed clock makes every report reproducible.
pub trait Clock {
    /// The current calendar day, with no time-of-day component.
    fn today(&self) -> NaiveDate;
}

/// Reads the local system clock and truncates to the calendar day.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}
