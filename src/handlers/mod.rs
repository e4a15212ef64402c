//! MCP tool handlers for the assistant server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file for better organization.

pub mod compose_response;
pub mod extract_task;
pub mod process_message;
pub mod suggest;
