use chrono::{Local, NaiveDateTime};

/// Supplies the wall clock reading for each tick.
pub trait TimeSource {
    fn now(&self) -> NaiveDateTime;
}

/// Local time zone of the running process.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTime;

impl TimeSource for LocalTime {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}
