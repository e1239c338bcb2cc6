use chrono::NaiveDate;
use serde::Serialize;
use crate::domain::models::preferences::TimeSlot;
use crate::domain::services::availability::CapacityWarning;
use crate::domain::services::time_slots::TimelineStage;

#[derive(Serialize)]
pub struct CalendarDayResponse {
    pub date: NaiveDate,
    pub bookable: bool,
    pub spots: i32,
    pub time_slot: Option<String>,
}

#[derive(Serialize)]
pub struct ScheduleResponse {
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub timeline: Vec<TimelineStage>,
}

#[derive(Serialize)]
pub struct BookingCheckResponse {
    pub bookable: bool,
    pub unavailable_dates: Vec<NaiveDate>,
    pub warnings: Vec<CapacityWarning>,
}

#[derive(Serialize)]
pub struct DeleteOverrideResponse {
    pub date: NaiveDate,
    pub status: &'static str,
}
