use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashMap;
use crate::domain::models::date_override::{DateOverride, SpotCapacity};
use crate::domain::models::preferences::{Preferences, TimeSlot};
use crate::domain::services::capacity::spots_for;
use crate::domain::services::season::{is_allowed_weekday, is_in_season};
use crate::domain::services::time_slots::slot_for_month;

/// Immutable view of preferences and overrides, fetched once per request.
#[derive(Debug, Clone)]
pub struct AvailabilitySnapshot {
    preferences: Preferences,
    overrides: HashMap<NaiveDate, DateOverride>,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct CapacityWarning {
    pub date: NaiveDate,
    pub spots: i32,
}

/// Per-date breakdown of the bookability checks, for calendar styling.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub bookable: bool,
    pub meets_lead_time: bool,
    pub in_season: bool,
    pub allowed_weekday: bool,
    pub spots: i32,
    pub closed: bool,
    pub customized: bool,
    pub note: Option<String>,
    pub time_slot: Option<String>,
}

impl AvailabilitySnapshot {
    pub fn new(preferences: Preferences, overrides: Vec<DateOverride>) -> Self {
        let overrides = overrides.into_iter().map(|o| (o.date, o)).collect();
        Self { preferences, overrides }
    }

    pub fn override_for(&self, date: NaiveDate) -> Option<&DateOverride> {
        self.overrides.get(&date)
    }

    pub fn spots_for(&self, date: NaiveDate) -> i32 {
        spots_for(&self.preferences, self.override_for(date))
    }

    pub fn slot_for(&self, date: NaiveDate) -> Option<&TimeSlot> {
        slot_for_month(&self.preferences.monthly_time_slots, date.month())
    }

    fn meets_lead_time(date: NaiveDate, today: NaiveDate, lead_days: i64) -> bool {
        Duration::try_days(lead_days)
            .and_then(|lead| today.checked_add_signed(lead))
            .is_some_and(|earliest| date >= earliest)
    }

    /// Lead time, season, weekday and capacity, evaluated in that order.
    pub fn is_bookable(&self, date: NaiveDate, today: NaiveDate, lead_days: i64) -> bool {
        Self::meets_lead_time(date, today, lead_days)
            && is_in_season(&self.preferences, date)
            && is_allowed_weekday(&self.preferences, date)
            && self.spots_for(date) != 0
    }

    pub fn day_status(&self, date: NaiveDate, today: NaiveDate, lead_days: i64) -> DayStatus {
        let override_rule = self.override_for(date);

        DayStatus {
            date,
            bookable: self.is_bookable(date, today, lead_days),
            meets_lead_time: Self::meets_lead_time(date, today, lead_days),
            in_season: is_in_season(&self.preferences, date),
            allowed_weekday: is_allowed_weekday(&self.preferences, date),
            spots: self.spots_for(date),
            closed: override_rule.is_some_and(|o| o.capacity() == SpotCapacity::Closed),
            customized: override_rule.is_some(),
            note: override_rule.and_then(|o| o.note.clone()),
            time_slot: self.slot_for(date).map(|s| s.label.clone()),
        }
    }

    /// Dates whose capacity is positive but below the requested guest count.
    pub fn capacity_warnings(&self, dates: &[NaiveDate], guests: i32) -> Vec<CapacityWarning> {
        dates
            .iter()
            .filter_map(|&date| {
                let spots = self.spots_for(date);
                (spots > 0 && spots < guests).then_some(CapacityWarning { date, spots })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn today() -> NaiveDate {
        date("2025-06-01")
    }

    #[test]
    fn test_in_season_sunday_is_bookable_by_default() {
        let snapshot = AvailabilitySnapshot::new(Preferences::default(), vec![]);
        assert!(snapshot.is_bookable(date("2025-06-15"), today(), 2));
        assert_eq!(snapshot.spots_for(date("2025-06-15")), 8);
    }

    #[test]
    fn test_out_of_season_is_never_bookable() {
        let overrides = vec![DateOverride::new(date("2025-04-19"), Some(20), None)];
        let snapshot = AvailabilitySnapshot::new(Preferences::default(), overrides);
        assert!(!snapshot.is_bookable(date("2025-04-19"), date("2025-01-01"), 0));
        assert!(!snapshot.is_bookable(date("2025-10-10"), date("2025-01-01"), 0));
    }

    #[test]
    fn test_disabled_weekday_is_not_bookable() {
        let mut prefs = Preferences::default();
        prefs.available_days = (1..=6).collect();
        let snapshot = AvailabilitySnapshot::new(prefs, vec![]);
        assert!(!snapshot.is_bookable(date("2025-06-15"), today(), 0));
        assert!(snapshot.is_bookable(date("2025-06-16"), today(), 0));
    }

    #[test]
    fn test_closed_override_blocks_date() {
        let overrides = vec![DateOverride::new(date("2025-06-15"), Some(0), None)];
        let snapshot = AvailabilitySnapshot::new(Preferences::default(), overrides);
        assert!(!snapshot.is_bookable(date("2025-06-15"), today(), 0));
        assert!(snapshot.is_bookable(date("2025-06-16"), today(), 0));
    }

    #[test]
    fn test_lead_time() {
        let snapshot = AvailabilitySnapshot::new(Preferences::default(), vec![]);
        let today = date("2025-06-10");
        assert!(!snapshot.is_bookable(date("2025-06-11"), today, 2));
        assert!(snapshot.is_bookable(date("2025-06-12"), today, 2));
        assert!(snapshot.is_bookable(date("2025-06-10"), today, 0));
        assert!(!snapshot.is_bookable(date("2025-06-09"), today, 0));
    }

    #[test]
    fn test_lead_time_past_calendar_end_is_not_met() {
        let snapshot = AvailabilitySnapshot::new(Preferences::default(), vec![]);
        assert!(!snapshot.is_bookable(NaiveDate::MAX, NaiveDate::MAX, 2));
        assert!(!snapshot.is_bookable(date("2025-06-15"), today(), i64::MAX));
    }

    #[test]
    fn test_day_status_flags() {
        let overrides = vec![
            DateOverride::new(date("2025-06-15"), Some(0), Some("Holiday".into())),
            DateOverride::new(date("2025-06-16"), Some(8), None),
        ];
        let snapshot = AvailabilitySnapshot::new(Preferences::default(), overrides);

        let closed = snapshot.day_status(date("2025-06-15"), today(), 0);
        assert!(!closed.bookable);
        assert!(closed.closed);
        assert!(closed.customized);
        assert!(closed.in_season);
        assert_eq!(closed.note.as_deref(), Some("Holiday"));

        // same value as the default still counts as customized
        let custom = snapshot.day_status(date("2025-06-16"), today(), 0);
        assert!(custom.bookable);
        assert!(custom.customized);
        assert!(!custom.closed);
        assert_eq!(custom.spots, 8);

        let plain = snapshot.day_status(date("2025-06-17"), today(), 0);
        assert!(!plain.customized);
        assert_eq!(plain.time_slot.as_deref(), Some("Evening class"));
    }

    #[test]
    fn test_capacity_warnings() {
        let overrides = vec![DateOverride::new(date("2025-06-15"), Some(3), None)];
        let snapshot = AvailabilitySnapshot::new(Preferences::default(), overrides);
        let dates = [date("2025-06-15"), date("2025-06-16")];

        let warnings = snapshot.capacity_warnings(&dates, 5);
        assert_eq!(warnings, vec![CapacityWarning { date: date("2025-06-15"), spots: 3 }]);

        assert!(snapshot.capacity_warnings(&dates, 3).is_empty());
        assert!(snapshot.capacity_warnings(&dates, 1).is_empty());
    }

    #[test]
    fn test_closed_dates_produce_no_warning() {
        let overrides = vec![DateOverride::new(date("2025-06-15"), Some(0), None)];
        let snapshot = AvailabilitySnapshot::new(Preferences::default(), overrides);
        assert!(snapshot.capacity_warnings(&[date("2025-06-15")], 5).is_empty());
    }
}
