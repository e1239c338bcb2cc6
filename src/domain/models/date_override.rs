use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq)]
pub struct DateOverride {
    pub date: NaiveDate,
    /// `None` defers to the default spots, `Some(0)` closes the date.
    pub available_spots: Option<i32>,
    pub note: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Typed reading of the nullable `available_spots` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotCapacity {
    Default,
    Closed,
    Fixed(i32),
}

impl SpotCapacity {
    pub fn resolve(self, default_spots: i32) -> i32 {
        match self {
            SpotCapacity::Default => default_spots,
            SpotCapacity::Closed => 0,
            SpotCapacity::Fixed(n) => n,
        }
    }
}

impl DateOverride {
    pub fn new(date: NaiveDate, available_spots: Option<i32>, note: Option<String>) -> Self {
        Self {
            date,
            available_spots,
            note,
            updated_at: Utc::now(),
        }
    }

    pub fn capacity(&self) -> SpotCapacity {
        match self.available_spots {
            None => SpotCapacity::Default,
            Some(0) => SpotCapacity::Closed,
            Some(n) => SpotCapacity::Fixed(n),
        }
    }
}
