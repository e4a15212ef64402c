//! Attribute extractors
//!
//! Each extractor is an independent scan of the message against one table in
//! [`super::vocabulary`]. None of them can fail.

use chrono::{Days, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use super::types::Priority;
use super::vocabulary::{
    DUE_DATE_RULES, DURATION_UNITS, PRIORITY_TIERS, PROJECT_HINTS, TAGS, contains_any,
};

// <ASCII integer><optional whitespace><unit>, alternation built from DURATION_UNITS.
// `\d` would also accept non-ASCII digits that `u32::from_str` rejects.
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let units: Vec<&str> = DURATION_UNITS.iter().map(|(unit, _)| *unit).collect();
    Regex::new(&format!(r"(?i)([0-9]+)\s*({})", units.join("|"))).expect("Invalid regex")
});

/// Resolve the priority tier of a normalized message
///
/// The first tier with a matching marker wins, so a message that is both
/// "urgent" and "low priority" is high priority.
pub fn extract_priority(lowered: &str) -> Priority {
    PRIORITY_TIERS
        .iter()
        .find(|(_, markers)| contains_any(lowered, markers))
        .map(|(priority, _)| *priority)
        .unwrap_or_default()
}

/// Resolve a relative date keyword against the reference date
///
/// Offsets are never negative, so the result is never before `reference`.
/// A date past the end of the calendar range resolves to `None`.
pub fn extract_due_date(lowered: &str, reference: NaiveDate) -> Option<NaiveDate> {
    DUE_DATE_RULES
        .iter()
        .find(|(keywords, _)| contains_any(lowered, keywords))
        .and_then(|(_, days)| reference.checked_add_days(Days::new(*days)))
}

/// Sum every duration mention in the message, in minutes
///
/// Returns `None` (not zero) when nothing matched. Amounts too large for a
/// `u32` saturate instead of wrapping. Only ASCII digits count as amounts.
pub fn extract_estimated_minutes(text: &str) -> Option<u32> {
    let mut total: Option<u32> = None;

    for caps in DURATION_PATTERN.captures_iter(text) {
        let amount = caps[1].parse::<u32>().unwrap_or(u32::MAX);
        let unit = caps[2].to_lowercase();
        let per_unit = DURATION_UNITS
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, minutes)| *minutes)
            .unwrap_or(1);

        let minutes = amount.saturating_mul(per_unit);
        total = Some(total.unwrap_or(0).saturating_add(minutes));
    }

    total
}

/// Pick the project hint; later keywords in the table overwrite earlier ones
pub fn extract_project_hint(lowered: &str) -> Option<String> {
    PROJECT_HINTS
        .iter()
        .rev()
        .find(|keyword| lowered.contains(*keyword))
        .map(|keyword| keyword.to_string())
}

/// Collect every tag keyword present, in vocabulary order
pub fn extract_tags(lowered: &str) -> Vec<String> {
    TAGS.iter()
        .filter(|tag| lowered.contains(*tag))
        .map(|tag| tag.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_priority_tiers() {
        assert_eq!(extract_priority("this is important"), Priority::High);
        assert_eq!(extract_priority("fix it asap"), Priority::High);
        assert_eq!(extract_priority("low priority: tidy desk"), Priority::Low);
        assert_eq!(extract_priority("read it when i have time"), Priority::Low);
        assert_eq!(extract_priority("buy milk"), Priority::Medium);
    }

    #[test]
    fn test_high_beats_low() {
        assert_eq!(
            extract_priority("urgent but also low priority"),
            Priority::High
        );
    }

    #[test]
    fn test_due_date_keywords() {
        let reference = date(2025, 3, 14);
        assert_eq!(extract_due_date("finish tonight", reference), Some(reference));
        assert_eq!(extract_due_date("do it today", reference), Some(reference));
        assert_eq!(
            extract_due_date("call tomorrow", reference),
            Some(date(2025, 3, 15))
        );
        assert_eq!(
            extract_due_date("sometime next week", reference),
            Some(date(2025, 3, 21))
        );
        assert_eq!(extract_due_date("someday", reference), None);
    }

    #[test]
    fn test_due_date_first_rule_wins() {
        let reference = date(2025, 3, 14);
        assert_eq!(
            extract_due_date("not today, tomorrow", reference),
            Some(reference)
        );
    }

    #[test]
    fn test_due_date_crosses_month_and_year() {
        assert_eq!(
            extract_due_date("tomorrow", date(2024, 12, 31)),
            Some(date(2025, 1, 1))
        );
        assert_eq!(
            extract_due_date("next week", date(2024, 2, 26)),
            Some(date(2024, 3, 4))
        );
    }

    #[test]
    fn test_estimated_minutes_units() {
        assert_eq!(extract_estimated_minutes("in 2 hours"), Some(120));
        assert_eq!(extract_estimated_minutes("3hr block"), Some(180));
        assert_eq!(extract_estimated_minutes("25 Minutes"), Some(25));
        assert_eq!(extract_estimated_minutes("15mins"), Some(15));
    }

    #[test]
    fn test_estimated_minutes_accumulate() {
        assert_eq!(
            extract_estimated_minutes("1 hour and 30 minutes"),
            Some(90)
        );
        assert_eq!(extract_estimated_minutes("10 min, then 10 min"), Some(20));
    }

    #[test]
    fn test_estimated_minutes_absent_vs_zero() {
        assert_eq!(extract_estimated_minutes("no numbers here"), None);
        assert_eq!(extract_estimated_minutes("0 minutes"), Some(0));
    }

    #[test]
    fn test_estimated_minutes_saturates() {
        assert_eq!(
            extract_estimated_minutes("99999999999999 hours"),
            Some(u32::MAX)
        );
    }

    #[test]
    fn test_due_date_at_end_of_calendar() {
        assert_eq!(extract_due_date("today", NaiveDate::MAX), Some(NaiveDate::MAX));
        assert_eq!(extract_due_date("tomorrow", NaiveDate::MAX), None);
        assert_eq!(extract_due_date("next week", NaiveDate::MAX), None);
    }

    #[test]
    fn test_estimated_minutes_ignores_non_ascii_digits() {
        assert_eq!(extract_estimated_minutes("read \u{663} min"), None);
        assert_eq!(extract_estimated_minutes("read \u{ff12} hours"), None);
        assert_eq!(extract_estimated_minutes("\u{ff12} hours, then 5 min"), Some(5));
    }

    #[test]
    fn test_project_hint_last_match_wins() {
        assert_eq!(
            extract_project_hint("work on the client project"),
            Some("client".to_string())
        );
        assert_eq!(
            extract_project_hint("home chores for work"),
            Some("home".to_string())
        );
        assert_eq!(extract_project_hint("buy milk"), None);
    }

    #[test]
    fn test_tags_in_vocabulary_order() {
        assert_eq!(
            extract_tags("research before the planning meeting"),
            vec!["meeting", "research", "planning"]
        );
        assert!(extract_tags("water the plants").is_empty());
    }
}
