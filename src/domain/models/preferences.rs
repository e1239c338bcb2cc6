use serde::{Deserialize, Serialize};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use sqlx::FromRow;
use std::collections::BTreeSet;

/// Fixed primary key of the singleton preferences row.
pub const PREFERENCES_ID: i32 = 1;

/// A calendar position without a year. Field order gives the derived `Ord`
/// month-major ordering used by the season window.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self { month: date.month(), day: date.day() }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: String,
    pub months: BTreeSet<u32>,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub season_start: MonthDay,
    pub season_end: MonthDay,
    /// 0 = Sunday .. 6 = Saturday
    pub available_days: BTreeSet<u32>,
    pub default_spots: i32,
    /// Order is significant: the first slot covering a month wins.
    pub monthly_time_slots: Vec<TimeSlot>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            season_start: MonthDay::new(4, 20),
            season_end: MonthDay::new(10, 9),
            available_days: (0..=6).collect(),
            default_spots: 8,
            monthly_time_slots: vec![TimeSlot {
                label: "Evening class".to_string(),
                months: (1..=12).collect(),
                start_time: "17:30".to_string(),
                end_time: "21:30".to_string(),
            }],
            updated_at: None,
        }
    }
}

/// Storage shape of the singleton row. Set-valued fields are kept as JSON text.
#[derive(Debug, FromRow, Clone)]
pub struct PreferencesRow {
    pub id: i32,
    pub season_start_month: i32,
    pub season_start_day: i32,
    pub season_end_month: i32,
    pub season_end_day: i32,
    pub available_days_json: String,
    pub default_spots: i32,
    pub monthly_time_slots_json: String,
    pub updated_at: DateTime<Utc>,
}

impl PreferencesRow {
    pub fn from_preferences(prefs: &Preferences, updated_at: DateTime<Utc>) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: PREFERENCES_ID,
            season_start_month: prefs.season_start.month as i32,
            season_start_day: prefs.season_start.day as i32,
            season_end_month: prefs.season_end.month as i32,
            season_end_day: prefs.season_end.day as i32,
            available_days_json: serde_json::to_string(&prefs.available_days)?,
            default_spots: prefs.default_spots,
            monthly_time_slots_json: serde_json::to_string(&prefs.monthly_time_slots)?,
            updated_at,
        })
    }

    pub fn into_preferences(self) -> Result<Preferences, serde_json::Error> {
        Ok(Preferences {
            season_start: MonthDay::new(self.season_start_month as u32, self.season_start_day as u32),
            season_end: MonthDay::new(self.season_end_month as u32, self.season_end_day as u32),
            available_days: serde_json::from_str(&self.available_days_json)?,
            default_spots: self.default_spots,
            monthly_time_slots: serde_json::from_str(&self.monthly_time_slots_json)?,
            updated_at: Some(self.updated_at),
        })
    }
}
