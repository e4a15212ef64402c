//! Suggest handler for the assistant MCP server

use crate::AssistantHandler;
use crate::extraction::ExtractionResult;
use crate::formatting;
use crate::suggestions;
use crate::validation;
use mcp_attr::Result as McpResult;

impl AssistantHandler {
    /// Handles suggestion requests for a task the user may already have edited.
    ///
    /// Only the fields the suggestion rules look at are taken; the title is irrelevant.
    pub async fn handle_suggest(
        &self,
        priority: String,
        due_date: Option<String>,
        estimated_minutes: Option<u32>,
    ) -> McpResult<String> {
        let task = ExtractionResult {
            priority: validation::parse_priority(&priority)?,
            due_date: validation::parse_optional_date(due_date.as_deref())?,
            estimated_minutes,
            ..Default::default()
        };

        let suggestions = suggestions::generate_suggestions(&task);
        if suggestions.is_empty() {
            return Ok("No suggestions: the task is fully specified".to_string());
        }

        Ok(formatting::format_suggestions(&suggestions))
    }
}
