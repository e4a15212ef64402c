//! Common test utilities for integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use task_assist_mcp::{AssistantConfig, AssistantHandler};

/// Friday 2025-03-14, the date every test treats as today
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

/// Mid-afternoon on the reference date
pub fn reference_instant() -> NaiveDateTime {
    reference_date().and_hms_opt(15, 30, 0).unwrap()
}

/// Create a handler pinned to the reference date
pub fn get_test_handler() -> AssistantHandler {
    AssistantHandler::new(AssistantConfig {
        reference_date: Some(reference_date()),
    })
}
