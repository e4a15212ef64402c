//! Follow-up suggestions for an extracted task
//!
//! Every rule looks at one field of the result and is evaluated on its own,
//! so zero to three suggestions come back, always in the order priority,
//! schedule, focus.

use crate::extraction::vocabulary::{
    FOCUS_PROMPT, FOCUS_SESSION_MAX_MINUTES, PRIORITY_PROMPT, SCHEDULE_OPTIONS, SCHEDULE_PROMPT,
};
use crate::extraction::{ExtractionResult, Priority, Suggestion, SuggestionKind, SuggestionPayload};

type SuggestionRule = fn(&ExtractionResult) -> Option<Suggestion>;

const RULES: &[SuggestionRule] = &[suggest_priority, suggest_schedule, suggest_focus];

/// Propose clarifications for whatever the extraction left open
pub fn generate_suggestions(result: &ExtractionResult) -> Vec<Suggestion> {
    RULES.iter().filter_map(|rule| rule(result)).collect()
}

/// Medium means no urgency marker was found, so ask
fn suggest_priority(result: &ExtractionResult) -> Option<Suggestion> {
    (result.priority == Priority::Medium).then(|| Suggestion {
        kind: SuggestionKind::Priority,
        prompt: PRIORITY_PROMPT.to_string(),
        payload: SuggestionPayload::SetPriority {
            value: Priority::High,
        },
    })
}

fn suggest_schedule(result: &ExtractionResult) -> Option<Suggestion> {
    result.due_date.is_none().then(|| Suggestion {
        kind: SuggestionKind::Schedule,
        prompt: SCHEDULE_PROMPT.to_string(),
        payload: SuggestionPayload::SetDueDate {
            options: SCHEDULE_OPTIONS.iter().map(|o| o.to_string()).collect(),
        },
    })
}

/// Short tasks fit in one focus session
///
/// Only non-zero estimates of at most an hour qualify. "0 minutes" is a
/// present estimate but gets no suggestion, as in the chat assistant's
/// earlier focus-session rule.
fn suggest_focus(result: &ExtractionResult) -> Option<Suggestion> {
    let minutes = result
        .estimated_minutes
        .filter(|m| (1..=FOCUS_SESSION_MAX_MINUTES).contains(m))?;

    Some(Suggestion {
        kind: SuggestionKind::Focus,
        prompt: FOCUS_PROMPT.to_string(),
        payload: SuggestionPayload::StartFocus { minutes },
    })
}
