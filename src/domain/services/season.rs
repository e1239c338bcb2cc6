use chrono::{Datelike, NaiveDate};
use crate::domain::models::preferences::{MonthDay, Preferences};

/// Whether `date` falls inside the configured booking season, bounds inclusive.
///
/// The comparison is on `(month, day)` only and assumes the season starts and
/// ends within one calendar year. A season configured across new year
/// (e.g. Nov 1 .. Feb 28) has `start > end`, so no date ever satisfies it and
/// every date evaluates as out of season.
pub fn is_in_season(prefs: &Preferences, date: NaiveDate) -> bool {
    let candidate = MonthDay::of(date);
    prefs.season_start <= candidate && candidate <= prefs.season_end
}

/// 0 = Sunday .. 6 = Saturday
pub fn weekday_index(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

pub fn is_allowed_weekday(prefs: &Preferences, date: NaiveDate) -> bool {
    prefs.available_days.contains(&weekday_index(date))
}
