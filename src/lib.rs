//! Task Assistant MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server that turns
//! natural-language requests ("remind me to call the client tomorrow, 30 min")
//! into structured tasks: title, priority, due date, duration estimate, tags and
//! a project hint, plus follow-up suggestions and a short acknowledgement.
//!
//! # Architecture
//!
//! The library follows a 2-layer architecture:
//! - **MCP Layer**: `AssistantHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `extraction`, `suggestions`, `response` - Pure, stateless
//!   keyword extraction driven by the tables in `extraction::vocabulary`
//!
//! Nothing is persisted. The MCP client owns tasks and conversation history and
//! decides what to do with each extraction.
//!
//! # Example
//!
//! ```
//! use task_assist_mcp::{extract, generate_suggestions, SuggestionKind};
//! use chrono::NaiveDate;
//!
//! let now = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(9, 0, 0).unwrap();
//! let task = extract("Remind me to plan the offsite in 2 hours", now).unwrap();
//! assert_eq!(task.title, "Plan the offsite in 2 hours");
//! assert_eq!(task.estimated_minutes, Some(120));
//!
//! let kinds: Vec<_> = generate_suggestions(&task).iter().map(|s| s.kind).collect();
//! assert_eq!(kinds, vec![SuggestionKind::Priority, SuggestionKind::Schedule]);
//! ```

mod error;
pub mod extraction;
pub mod formatting;
mod handlers;
pub mod response;
pub mod suggestions;
pub mod validation;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};

// Re-export commonly used types
pub use error::ExtractionError;
pub use extraction::{
    AssistantReply, ExtractionResult, Priority, Suggestion, SuggestionKind, SuggestionPayload,
    extract, process_message,
};
pub use response::compose_response;
pub use suggestions::generate_suggestions;

/// Server configuration, built from command-line arguments
#[derive(Debug, Clone, Default)]
pub struct AssistantConfig {
    /// Date treated as "today" for every request that does not pass its own
    pub reference_date: Option<NaiveDate>,
}

/// MCP Server handler for natural-language task capture
///
/// Holds configuration only. Every tool call is independent, so the handler
/// needs no locking and can serve concurrent requests.
pub struct AssistantHandler {
    pub(crate) config: AssistantConfig,
}

impl AssistantHandler {
    /// Create a new assistant handler
    ///
    /// # Example
    /// ```
    /// # use task_assist_mcp::{AssistantConfig, AssistantHandler};
    /// let handler = AssistantHandler::new(AssistantConfig::default());
    /// ```
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }

    /// Resolve the instant used as "now" for one request
    ///
    /// Precedence: the request's own `reference_date`, then the configured
    /// date, then the local clock. Explicit dates resolve to midnight.
    pub(crate) fn reference_instant(
        &self,
        reference_date: Option<&str>,
    ) -> McpResult<NaiveDateTime> {
        if let Some(date) = validation::parse_optional_date(reference_date)? {
            return Ok(date.and_time(NaiveTime::MIN));
        }
        Ok(match self.config.reference_date {
            Some(date) => date.and_time(NaiveTime::MIN),
            None => Local::now().naive_local(),
        })
    }
}

/// Task assistant that turns chat messages into structured tasks.
///
/// Send the user's message as-is. The server infers:
/// - **title**: the message without "create", "add", "remind me to", "i need to", "todo" and leading articles
/// - **priority**: high for urgent/asap/important, low for "low priority"/"when i have time", otherwise medium
/// - **due date**: today/tonight, tomorrow, next week (YYYY-MM-DD)
/// - **estimate**: every "<n> hour(s)/hr/minute(s)/min" mention, summed
/// - **tags**: meeting, call, email, review, presentation, research, planning
/// - **project hint**: work, personal, home, project, client
///
/// Nothing is saved. Create the task in your task store once the user confirms.
#[mcp_server]
impl McpServer for AssistantHandler {
    /// **Chat**: Answer a user's message with an acknowledgement, the extracted task and follow-up questions.
    /// **Workflow**: 1) process_message → 2) show suggestions → 3) create the task in your store once confirmed.
    #[tool]
    async fn process_message(
        &self,
        /// Message: the user's request, verbatim
        message: String,
        /// Reference date: YYYY-MM-DD treated as today (optional, default: server date)
        reference_date: Option<String>,
    ) -> McpResult<String> {
        self.handle_process_message(message, reference_date).await
    }

    /// **Extract**: Same analysis as process_message, returned as a TOML document (response, [extracted], [[suggestions]]).
    /// **Use**: Prefill a task form programmatically.
    #[tool]
    async fn extract_task(
        &self,
        /// Message: the user's request, verbatim
        message: String,
        /// Reference date: YYYY-MM-DD treated as today (optional, default: server date)
        reference_date: Option<String>,
    ) -> McpResult<String> {
        self.handle_extract_task(message, reference_date).await
    }

    /// **Suggest**: Follow-up questions for a task the user has already edited.
    /// **Rules**: medium priority → ask about high priority; no due date → offer Today/Tomorrow/This week; estimate of 60 min or less → offer a focus session.
    #[tool]
    async fn suggest(
        &self,
        /// Priority: low/medium/high
        priority: String,
        /// Due date: YYYY-MM-DD (optional)
        due_date: Option<String>,
        /// Estimated minutes (optional)
        estimated_minutes: Option<u32>,
    ) -> McpResult<String> {
        self.handle_suggest(priority, due_date, estimated_minutes)
            .await
    }

    /// **Acknowledge**: Short canned reply for a message (create/urgent/today/tomorrow/general). Never fails.
    #[tool]
    async fn compose_response(
        &self,
        /// Message: the user's request, verbatim
        message: String,
    ) -> McpResult<String> {
        self.handle_compose_response(message).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pinned_handler() -> AssistantHandler {
        AssistantHandler::new(AssistantConfig {
            reference_date: NaiveDate::from_ymd_opt(2025, 3, 14),
        })
    }

    #[test]
    fn test_reference_instant_prefers_request_date() {
        let handler = pinned_handler();
        let instant = handler.reference_instant(Some("2025-06-01")).unwrap();
        assert_eq!(instant.date(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
    }

    #[test]
    fn test_reference_instant_falls_back_to_config() {
        let handler = pinned_handler();
        let instant = handler.reference_instant(None).unwrap();
        assert_eq!(instant.date(), NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());

        let instant = handler.reference_instant(Some("")).unwrap();
        assert_eq!(instant.date(), NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
    }

    #[test]
    fn test_reference_instant_rejects_bad_date() {
        let handler = pinned_handler();
        assert!(handler.reference_instant(Some("next tuesday")).is_err());
    }

    #[test]
    fn test_reference_instant_defaults_to_local_clock() {
        let handler = AssistantHandler::new(AssistantConfig::default());
        let before = Local::now().date_naive();
        let instant = handler.reference_instant(None).unwrap();
        let after = Local::now().date_naive();
        assert!(instant.date() >= before && instant.date() <= after);
    }
}
