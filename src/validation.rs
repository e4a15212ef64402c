//! Validation helper functions for the assistant MCP server
//!
//! This module parses tool parameters and maps engine errors onto MCP errors.

use crate::error::ExtractionError;
use crate::extraction::Priority;
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse and validate a reference date parameter
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing parsed NaiveDate or error
pub fn parse_reference_date(date_str: &str) -> McpResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        invalid_params(format!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        ))
    })
}

/// Parse and validate a priority parameter
pub fn parse_priority(priority_str: &str) -> McpResult<Priority> {
    priority_str.parse::<Priority>().map_err(invalid_params)
}

/// Validate an optional due date parameter, treating "" as not set
pub fn parse_optional_date(date_str: Option<&str>) -> McpResult<Option<NaiveDate>> {
    match date_str {
        Some(s) if !s.trim().is_empty() => parse_reference_date(s).map(Some),
        _ => Ok(None),
    }
}

/// Convert an extraction error into an MCP error the client can show the user
pub fn extraction_error(err: ExtractionError) -> mcp_attr::Error {
    invalid_params(err.to_string())
}
