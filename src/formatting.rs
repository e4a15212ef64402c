//! Formatting helper functions for the assistant MCP server
//!
//! This module turns extraction results and suggestions into the text
//! returned by the MCP tools.

use crate::extraction::{AssistantReply, ExtractionResult, Suggestion, SuggestionPayload};
use anyhow::Result;

/// Format the extracted task fields, one per line
///
/// Fields the message did not mention are left out.
pub fn format_extraction(result: &ExtractionResult) -> String {
    let mut output = format!("Task: {}\n", result.title);
    output.push_str(&format!("  Priority: {}\n", result.priority));

    if let Some(ref date) = result.due_date {
        output.push_str(&format!("  Due date: {}\n", date));
    }
    if let Some(minutes) = result.estimated_minutes {
        output.push_str(&format!("  Estimate: {} min\n", minutes));
    }
    if let Some(ref hint) = result.project_hint {
        output.push_str(&format!("  Project hint: {}\n", hint));
    }
    if !result.tags.is_empty() {
        output.push_str(&format!("  Tags: {}\n", result.tags.join(", ")));
    }

    output
}

/// Format suggestions as a numbered list
///
/// # Returns
/// An empty string when there is nothing to suggest
pub fn format_suggestions(suggestions: &[Suggestion]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }

    let mut output = String::from("Suggestions:\n");
    for (index, suggestion) in suggestions.iter().enumerate() {
        let detail = match &suggestion.payload {
            SuggestionPayload::SetPriority { value } => format!("set priority to {}", value),
            SuggestionPayload::SetDueDate { options } => options.join(" / "),
            SuggestionPayload::StartFocus { minutes } => format!("{} min session", minutes),
        };
        output.push_str(&format!(
            "{}. {} [{}]\n",
            index + 1,
            suggestion.prompt,
            detail
        ));
    }

    output
}

/// Format a full reply for display in the chat
pub fn format_reply(reply: &AssistantReply) -> String {
    let mut output = format!("{}\n\n", reply.response);
    output.push_str(&format_extraction(&reply.extracted));

    let suggestions = format_suggestions(&reply.suggestions);
    if !suggestions.is_empty() {
        output.push('\n');
        output.push_str(&suggestions);
    }

    output
}

/// Render a reply as a TOML document for programmatic clients
pub fn reply_to_toml(reply: &AssistantReply) -> Result<String> {
    Ok(toml::to_string_pretty(reply)?)
}
