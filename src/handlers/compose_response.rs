//! Compose-response handler for the assistant MCP server

use crate::AssistantHandler;
use crate::response;
use mcp_attr::Result as McpResult;

impl AssistantHandler {
    /// Handles acknowledgement-only requests. Never fails.
    pub async fn handle_compose_response(&self, message: String) -> McpResult<String> {
        Ok(response::compose_response(&message).to_string())
    }
}
