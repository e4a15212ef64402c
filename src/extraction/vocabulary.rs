//! Keyword tables driving every extractor
//!
//! All matching in this crate is table-driven: each extractor walks one of
//! the ordered tables below and applies the effect attached to the first (or
//! last, or every) keyword it finds. Extending a vocabulary means editing a
//! table, never the control flow.
//!
//! All keywords are lowercase; they are matched against normalized text.

use super::types::Priority;

/// Phrases that introduce a task ("remind me to ...")
///
/// Checked in this order; each one present is removed once.
pub const INTRO_PHRASES: &[&str] = &[
    "create",
    "add",
    "new task",
    "remind me to",
    "i need to",
    "todo",
];

/// Leading articles, at most one is stripped
pub const ARTICLES: &[&str] = &["a ", "an ", "the "];

/// Task-noun filler left over once an introduction phrase is gone
/// ("create a task to review" -> "task to review" -> "review")
pub const TASK_FILLERS: &[&str] = &["task to ", "task for ", "to "];

/// Urgency tiers, highest first. The first tier with a match decides.
pub const PRIORITY_TIERS: &[(Priority, &[&str])] = &[
    (Priority::High, &["urgent", "asap", "important"]),
    (Priority::Low, &["low priority", "when i have time"]),
];

/// Relative date keywords and the number of days they add to the reference date
pub const DUE_DATE_RULES: &[(&[&str], u64)] = &[
    (&["today", "tonight"], 0),
    (&["tomorrow"], 1),
    (&["next week"], 7),
];

/// Duration units and their length in minutes
///
/// Order matters for the alternation built from it: "minute" must be tried
/// before its prefix "min".
pub const DURATION_UNITS: &[(&str, u32)] = &[("hour", 60), ("hr", 60), ("minute", 1), ("min", 1)];

/// Project hint keywords; the last one present wins
pub const PROJECT_HINTS: &[&str] = &["work", "personal", "home", "project", "client"];

/// Tag vocabulary; every keyword present becomes a tag
pub const TAGS: &[&str] = &[
    "meeting",
    "call",
    "email",
    "review",
    "presentation",
    "research",
    "planning",
];

pub const CREATE_RESPONSE: &str = "I'll help you create that task! I've extracted the details from your message. Please review and confirm the task details.";
pub const URGENT_RESPONSE: &str = "I understand this is urgent. I'll set this as high priority and suggest scheduling it in your next available time slot.";
pub const TODAY_RESPONSE: &str = "Got it! I'll schedule this for today. Based on your current workload, I recommend focusing on this during your most productive hours.";
pub const TOMORROW_RESPONSE: &str = "Perfect! I'll add this to tomorrow's schedule. Would you like me to suggest an optimal time based on your calendar?";
pub const GENERIC_RESPONSE: &str = "I understand! Let me help you organize this task. I've analyzed your message and extracted the key information.";

/// Acknowledgement rules, first match wins; falls back to [`GENERIC_RESPONSE`]
pub const RESPONSE_RULES: &[(&[&str], &str)] = &[
    (&["create", "add", "new task"], CREATE_RESPONSE),
    (&["urgent", "asap"], URGENT_RESPONSE),
    (&["today", "tonight"], TODAY_RESPONSE),
    (&["tomorrow"], TOMORROW_RESPONSE),
];

pub const PRIORITY_PROMPT: &str = "Would you like to set this as high priority?";
pub const SCHEDULE_PROMPT: &str = "When would you like to complete this?";
pub const SCHEDULE_OPTIONS: &[&str] = &["Today", "Tomorrow", "This week"];
pub const FOCUS_PROMPT: &str = "Start a focus session for this task?";

/// Longest estimate (in minutes) that still fits a single focus session
pub const FOCUS_SESSION_MAX_MINUTES: u32 = 60;

/// True if `text` contains any of `keywords`
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_lowercase(words: &[&str]) -> bool {
        words.iter().all(|w| *w == w.to_lowercase())
    }

    #[test]
    fn test_vocabularies_are_lowercase() {
        assert!(all_lowercase(INTRO_PHRASES));
        assert!(all_lowercase(ARTICLES));
        assert!(all_lowercase(TASK_FILLERS));
        assert!(all_lowercase(PROJECT_HINTS));
        assert!(all_lowercase(TAGS));
        for (_, markers) in PRIORITY_TIERS {
            assert!(all_lowercase(markers));
        }
        for (keywords, _) in DUE_DATE_RULES {
            assert!(all_lowercase(keywords));
        }
        for (keywords, _) in RESPONSE_RULES {
            assert!(all_lowercase(keywords));
        }
    }

    #[test]
    fn test_high_tier_checked_before_low() {
        assert_eq!(PRIORITY_TIERS[0].0, Priority::High);
        assert_eq!(PRIORITY_TIERS[1].0, Priority::Low);
    }

    #[test]
    fn test_longer_unit_precedes_its_prefix() {
        let position = |unit: &str| DURATION_UNITS.iter().position(|(u, _)| *u == unit);
        assert!(position("minute") < position("min"));
        assert!(position("hour") < position("hr"));
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("call the client asap", &["urgent", "asap"]));
        assert!(!contains_any("call the client", &["urgent", "asap"]));
        assert!(!contains_any("", &["urgent"]));
    }
}
