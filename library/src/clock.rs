use chrono::{Local, NaiveDateTime};

pub trait Clock {
    #[must_use]
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local time zone.
#[derive(Default, Debug, Copy, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
