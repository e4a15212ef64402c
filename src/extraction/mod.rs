//! Natural-language task extraction
//!
//! This module turns a free-text chat message into a structured task.
//! It is split into submodules:
//! - `normalize`: case folding for keyword matching
//! - `title`: title derivation from the original text
//! - `attributes`: priority, due date, duration, project hint and tag scans
//! - `vocabulary`: the ordered keyword tables every stage reads
//! - `types`: result and suggestion types

pub mod attributes;
pub mod normalize;
pub mod title;
mod types;
pub mod vocabulary;

pub use normalize::{NormalizedText, normalize};
pub use types::{
    AssistantReply, ExtractionResult, Priority, Suggestion, SuggestionKind, SuggestionPayload,
};

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::error::ExtractionError;
use crate::response::compose_response;
use crate::suggestions::generate_suggestions;

/// Infer a structured task from `text`
///
/// `reference` is the instant treated as "now"; only its calendar date is
/// used to resolve "today", "tomorrow" and "next week".
///
/// # Errors
/// Returns [`ExtractionError::EmptyInput`] if `text` is blank. No stage runs
/// in that case.
///
/// # Example
/// ```
/// # use task_assist_mcp::{extract, Priority};
/// # use chrono::NaiveDate;
/// let now = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let task = extract("urgent: call the client asap", now).unwrap();
/// assert_eq!(task.priority, Priority::High);
/// assert_eq!(task.project_hint.as_deref(), Some("client"));
/// ```
pub fn extract(text: &str, reference: NaiveDateTime) -> Result<ExtractionResult, ExtractionError> {
    if text.trim().is_empty() {
        warn!("rejected blank message");
        return Err(ExtractionError::EmptyInput);
    }

    let message = NormalizedText::new(text);
    let result = ExtractionResult {
        title: title::extract_title(message.original),
        priority: attributes::extract_priority(&message.lowered),
        due_date: attributes::extract_due_date(&message.lowered, reference.date()),
        tags: attributes::extract_tags(&message.lowered),
        project_hint: attributes::extract_project_hint(&message.lowered),
        estimated_minutes: attributes::extract_estimated_minutes(message.original),
    };

    debug!(
        title = %result.title,
        priority = %result.priority,
        due_date = ?result.due_date,
        tags = ?result.tags,
        project_hint = ?result.project_hint,
        estimated_minutes = ?result.estimated_minutes,
        "extracted task"
    );

    Ok(result)
}

/// Answer one chat message: acknowledgement, extracted task and follow-up suggestions
pub fn process_message(
    text: &str,
    reference: NaiveDateTime,
) -> Result<AssistantReply, ExtractionError> {
    let extracted = extract(text, reference)?;
    let suggestions = generate_suggestions(&extracted);

    Ok(AssistantReply {
        response: compose_response(text).to_string(),
        extracted,
        suggestions,
    })
}
