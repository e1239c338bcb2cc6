use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use crate::domain::models::preferences::TimeSlot;
use crate::error::AppError;

const MINUTES_PER_DAY: u32 = 1440;

const TIMELINE_STAGES: [(&str, u32); 5] = [
    ("Welcome", 0),
    ("Cooking begins", 30),
    ("Oven stage", 120),
    ("Dinner", 150),
    ("Farewell", 240),
];

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TimelineStage {
    pub label: String,
    pub time: String,
    pub next_day: bool,
}

/// First slot in stored order whose months contain `month`, else the first
/// slot. Overlapping month sets are resolved by list order.
/// `None` only for an empty list.
pub fn slot_for_month(slots: &[TimeSlot], month: u32) -> Option<&TimeSlot> {
    slots
        .iter()
        .find(|slot| slot.months.contains(&month))
        .or_else(|| slots.first())
}

/// Parses a strict zero-padded 24h `HH:MM` into minutes since midnight.
pub fn parse_clock_time(value: &str) -> Option<u32> {
    let bytes = value.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return None;
    }
    if !bytes.iter().enumerate().all(|(i, b)| i == 2 || b.is_ascii_digit()) {
        return None;
    }
    let time = NaiveTime::parse_from_str(value, "%H:%M").ok()?;
    Some(time.hour() * 60 + time.minute())
}

pub fn format_12h(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    let hour = minutes / 60;
    let minute = minutes % 60;
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hour, minute, suffix)
}

pub fn generate_timeline(start_time: &str) -> Result<Vec<TimelineStage>, AppError> {
    let start = parse_clock_time(start_time)
        .ok_or_else(|| AppError::MalformedInput(format!("Invalid start time '{}', expected HH:MM", start_time)))?;

    Ok(TIMELINE_STAGES
        .iter()
        .map(|(label, offset)| {
            let absolute = start + offset;
            TimelineStage {
                label: label.to_string(),
                time: format_12h(absolute),
                next_day: absolute >= MINUTES_PER_DAY,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(label: &str, months: &[u32]) -> TimeSlot {
        TimeSlot {
            label: label.to_string(),
            months: months.iter().copied().collect(),
            start_time: "18:00".to_string(),
            end_time: "22:00".to_string(),
        }
    }

    fn times(stages: &[TimelineStage]) -> Vec<&str> {
        stages.iter().map(|s| s.time.as_str()).collect()
    }

    #[test]
    fn test_timeline_evening_class() {
        let timeline = generate_timeline("17:30").unwrap();
        assert_eq!(times(&timeline), vec!["5:30 PM", "6:00 PM", "7:30 PM", "8:00 PM", "9:30 PM"]);
        assert_eq!(timeline[0].label, "Welcome");
        assert_eq!(timeline[4].label, "Farewell");
        assert!(timeline.iter().all(|s| !s.next_day));
    }

    #[test]
    fn test_timeline_wraps_past_midnight() {
        let timeline = generate_timeline("23:00").unwrap();
        assert_eq!(times(&timeline), vec!["11:00 PM", "11:30 PM", "1:00 AM", "1:30 AM", "3:00 AM"]);
        assert!(!timeline[1].next_day);
        assert!(timeline[2].next_day);
        assert!(timeline[4].next_day);
    }

    #[test]
    fn test_timeline_noon_and_midnight_labels() {
        let timeline = generate_timeline("12:00").unwrap();
        assert_eq!(timeline[0].time, "12:00 PM");
        let timeline = generate_timeline("00:15").unwrap();
        assert_eq!(timeline[0].time, "12:15 AM");
    }

    #[test]
    fn test_timeline_rejects_bad_start() {
        assert!(matches!(generate_timeline("5:30"), Err(AppError::MalformedInput(_))));
        assert!(matches!(generate_timeline("24:00"), Err(AppError::MalformedInput(_))));
        assert!(matches!(generate_timeline("ab:cd"), Err(AppError::MalformedInput(_))));
    }

    #[test]
    fn test_slot_for_month_disjoint_sets() {
        let slots = vec![slot("Summer", &[5, 6, 7, 8]), slot("Autumn", &[9, 10])];
        assert_eq!(slot_for_month(&slots, 5).unwrap().label, "Summer");
        assert_eq!(slot_for_month(&slots, 8).unwrap().label, "Summer");
        assert_eq!(slot_for_month(&slots, 9).unwrap().label, "Autumn");
        assert_eq!(slot_for_month(&slots, 10).unwrap().label, "Autumn");
        // uncovered month falls back to the first slot
        assert_eq!(slot_for_month(&slots, 1).unwrap().label, "Summer");
    }

    #[test]
    fn test_slot_for_month_first_listed_wins() {
        let slots = vec![slot("Late", &[6, 7]), slot("Early", &[5, 6])];
        assert_eq!(slot_for_month(&slots, 6).unwrap().label, "Late");
        assert_eq!(slot_for_month(&slots, 5).unwrap().label, "Early");
    }

    #[test]
    fn test_slot_for_month_empty_list() {
        assert!(slot_for_month(&[], 6).is_none());
    }
}
