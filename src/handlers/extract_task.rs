//! Extract-task handler for the assistant MCP server

use crate::AssistantHandler;
use crate::extraction;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl AssistantHandler {
    /// Handles structured extraction - returns the whole reply as a TOML document
    /// so clients can prefill a task form from it.
    pub async fn handle_extract_task(
        &self,
        message: String,
        reference_date: Option<String>,
    ) -> McpResult<String> {
        let reference = self.reference_instant(reference_date.as_deref())?;

        let reply = extraction::process_message(&message, reference)
            .map_err(validation::extraction_error)?;

        match formatting::reply_to_toml(&reply) {
            Ok(document) => Ok(document),
            Err(e) => {
                bail_public!(_, "Failed to render extraction result: {}", e);
            }
        }
    }
}
