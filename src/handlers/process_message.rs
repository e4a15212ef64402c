//! Process-message handler for the assistant MCP server

use crate::AssistantHandler;
use crate::extraction;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;
use tracing::info;

impl AssistantHandler {
    /// Handles a chat message - extracts the task, composes the acknowledgement
    /// and lists follow-up suggestions as display text.
    pub async fn handle_process_message(
        &self,
        message: String,
        reference_date: Option<String>,
    ) -> McpResult<String> {
        let reference = self.reference_instant(reference_date.as_deref())?;

        let reply = extraction::process_message(&message, reference)
            .map_err(validation::extraction_error)?;

        info!(
            title = %reply.extracted.title,
            suggestions = reply.suggestions.len(),
            "processed message"
        );

        Ok(formatting::format_reply(&reply))
    }
}
