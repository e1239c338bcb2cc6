use serde::Deserialize;

// Numeric fields are i64 so that bounds are checked by validation, not serde.

#[derive(Deserialize)]
pub struct MonthDayRequest {
    pub month: i64,
    pub day: i64,
}

#[derive(Deserialize)]
pub struct TimeSlotRequest {
    pub label: String,
    pub months: Vec<i64>,
    pub start_time: String,
    pub end_time: String,
}

#[derive(Deserialize)]
pub struct SavePreferencesRequest {
    pub season_start: MonthDayRequest,
    pub season_end: MonthDayRequest,
    pub available_days: Vec<i64>,
    pub default_spots: i64,
    pub monthly_time_slots: Vec<TimeSlotRequest>,
}

#[derive(Deserialize)]
pub struct DateOverrideRequest {
    pub date: String,
    #[serde(default)]
    pub available_spots: Option<i64>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Deserialize)]
pub struct BookingCheckRequest {
    pub dates: Vec<String>,
    pub guests: i64,
}
