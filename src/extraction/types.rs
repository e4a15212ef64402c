use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task priority inferred from urgency markers
///
/// Serialized in lowercase ("low", "medium", "high") to match what the
/// chat client sends back when the user edits a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    /// Used when no urgency marker was found
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}

/// Structured task inferred from a single free-text message
///
/// Every field is derived from the message text and the reference instant.
/// Nothing here has an identity: the caller attaches it to a task record
/// only if the user confirms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Message with introduction phrases and articles stripped, first letter capitalized
    pub title: String,
    pub priority: Priority,
    /// Calendar date resolved from "today", "tomorrow", "next week" (format: YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Tags from the fixed tag vocabulary, in vocabulary order
    pub tags: Vec<String>,
    /// Coarse category guess such as "work" or "client"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_hint: Option<String>,
    /// Sum of all duration mentions, absent when the message names none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
}

/// Which follow-up question a suggestion asks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Priority,
    Schedule,
    Focus,
}

/// Action the client performs when the user accepts a suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum SuggestionPayload {
    SetPriority { value: Priority },
    SetDueDate { options: Vec<String> },
    StartFocus { minutes: u32 },
}

/// Proposed clarification the UI may offer after an extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub prompt: String,
    pub payload: SuggestionPayload,
}

/// Everything the assistant says back for one chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub response: String,
    pub extracted: ExtractionResult,
    pub suggestions: Vec<Suggestion>,
}
