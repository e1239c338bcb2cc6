use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use crate::domain::ports::Clock;

pub struct SystemClock {
    tz: Tz,
}

impl SystemClock {
    pub fn new(tz: Tz) -> Self { Self { tz } }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}
