use chrono::NaiveDate;
use serde::Serialize;
use crate::domain::models::date_override::DateOverride;
use crate::domain::models::preferences::Preferences;

/// Bookable spots for a date. An override row wins over the default whenever
/// it carries a value, including `0` and values above the default.
/// Stored values are trusted as-is.
pub fn spots_for(prefs: &Preferences, override_rule: Option<&DateOverride>) -> i32 {
    match override_rule {
        Some(rule) => rule.capacity().resolve(prefs.default_spots),
        None => prefs.default_spots,
    }
}

/// Override as handed to public consumers: the null sentinel is already
/// expanded to the current default.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ResolvedOverride {
    pub date: NaiveDate,
    pub available_spots: i32,
    pub note: Option<String>,
}

pub fn resolve_public_overrides(prefs: &Preferences, overrides: &[DateOverride]) -> Vec<ResolvedOverride> {
    overrides
        .iter()
        .map(|o| ResolvedOverride {
            date: o.date,
            available_spots: spots_for(prefs, Some(o)),
            note: o.note.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_default_without_override() {
        let prefs = Preferences::default();
        assert_eq!(spots_for(&prefs, None), 8);
    }

    #[test]
    fn test_null_override_defers_to_default() {
        let prefs = Preferences::default();
        let o = DateOverride::new(date("2025-06-15"), None, Some("Private party".into()));
        assert_eq!(spots_for(&prefs, Some(&o)), prefs.default_spots);
    }

    #[test]
    fn test_override_values_are_returned_verbatim() {
        let prefs = Preferences::default();
        let closed = DateOverride::new(date("2025-06-15"), Some(0), None);
        let reduced = DateOverride::new(date("2025-06-15"), Some(3), None);
        let raised = DateOverride::new(date("2025-06-15"), Some(12), None);
        assert_eq!(spots_for(&prefs, Some(&closed)), 0);
        assert_eq!(spots_for(&prefs, Some(&reduced)), 3);
        assert_eq!(spots_for(&prefs, Some(&raised)), 12);
    }

    #[test]
    fn test_repeated_resolution_is_stable() {
        let prefs = Preferences::default();
        let o = DateOverride::new(date("2025-06-15"), Some(5), None);
        let first = spots_for(&prefs, Some(&o));
        let second = spots_for(&prefs, Some(&o));
        assert_eq!(first, second);
    }

    #[test]
    fn test_public_resolution_hides_null_sentinel() {
        let mut prefs = Preferences::default();
        prefs.default_spots = 6;
        let overrides = vec![
            DateOverride::new(date("2025-06-15"), None, Some("Chef visit".into())),
            DateOverride::new(date("2025-06-16"), Some(0), None),
        ];

        let resolved = resolve_public_overrides(&prefs, &overrides);
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].available_spots, 6);
        assert_eq!(resolved[0].note.as_deref(), Some("Chef visit"));
        assert_eq!(resolved[1].available_spots, 0);
    }
}
