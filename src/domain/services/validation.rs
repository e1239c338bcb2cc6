use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;
use crate::domain::models::preferences::{MonthDay, TimeSlot};
use crate::domain::services::time_slots::parse_clock_time;
use crate::error::AppError;

pub const MIN_DEFAULT_SPOTS: i64 = 1;
pub const MAX_DEFAULT_SPOTS: i64 = 100;
pub const MAX_CALENDAR_RANGE_DAYS: i64 = 366;

/// Day count used for month/day validation. February allows the 29th.
pub fn nominal_days_in_month(month: u32) -> u32 {
    match month {
        2 => 29,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::MalformedInput(format!("{} must be a calendar date (YYYY-MM-DD), got '{}'", field, value)))
}

pub fn month_day(month: i64, day: i64, field: &str) -> Result<MonthDay, AppError> {
    if !(1..=12).contains(&month) {
        return Err(AppError::OutOfRange(format!("{}.month must be between 1 and 12", field)));
    }
    let max_day = nominal_days_in_month(month as u32) as i64;
    if !(1..=max_day).contains(&day) {
        return Err(AppError::OutOfRange(format!("{}.day must be between 1 and {}", field, max_day)));
    }
    Ok(MonthDay::new(month as u32, day as u32))
}

pub fn weekday_set(days: &[i64]) -> Result<BTreeSet<u32>, AppError> {
    days.iter()
        .map(|&d| {
            if (0..=6).contains(&d) {
                Ok(d as u32)
            } else {
                Err(AppError::OutOfRange(format!("available_days entry {} is not a weekday (0-6)", d)))
            }
        })
        .collect()
}

pub fn default_spots(value: i64) -> Result<i32, AppError> {
    if !(MIN_DEFAULT_SPOTS..=MAX_DEFAULT_SPOTS).contains(&value) {
        return Err(AppError::OutOfRange(format!(
            "default_spots must be between {} and {}", MIN_DEFAULT_SPOTS, MAX_DEFAULT_SPOTS
        )));
    }
    Ok(value as i32)
}

pub fn clock_time(value: &str, field: &str) -> Result<String, AppError> {
    parse_clock_time(value)
        .map(|_| value.to_string())
        .ok_or_else(|| AppError::MalformedInput(format!("{} must be HH:MM, got '{}'", field, value)))
}

pub fn time_slot(label: &str, months: &[i64], start_time: &str, end_time: &str) -> Result<TimeSlot, AppError> {
    let months = months
        .iter()
        .map(|&m| {
            if (1..=12).contains(&m) {
                Ok(m as u32)
            } else {
                Err(AppError::OutOfRange(format!("time slot '{}' has month {} outside 1-12", label, m)))
            }
        })
        .collect::<Result<BTreeSet<u32>, AppError>>()?;

    Ok(TimeSlot {
        label: label.to_string(),
        months,
        start_time: clock_time(start_time, "start_time")?,
        end_time: clock_time(end_time, "end_time")?,
    })
}

pub fn override_spots(value: Option<i64>) -> Result<Option<i32>, AppError> {
    match value {
        None => Ok(None),
        Some(n) if n < 0 => Err(AppError::OutOfRange("available_spots must not be negative".into())),
        Some(n) => i32::try_from(n)
            .map(Some)
            .map_err(|_| AppError::OutOfRange("available_spots is too large".into())),
    }
}

pub fn guest_count(value: i64) -> Result<i32, AppError> {
    if value < 1 {
        return Err(AppError::OutOfRange("guests must be at least 1".into()));
    }
    i32::try_from(value).map_err(|_| AppError::OutOfRange("guests is too large".into()))
}

pub fn date_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), AppError> {
    let start = parse_date(start, "start")?;
    let end = parse_date(end, "end")?;
    if end < start {
        return Err(AppError::OutOfRange("end must not be before start".into()));
    }
    if end - start >= Duration::days(MAX_CALENDAR_RANGE_DAYS) {
        return Err(AppError::OutOfRange(format!("range must not exceed {} days", MAX_CALENDAR_RANGE_DAYS)));
    }
    Ok((start, end))
}
