//! Canned acknowledgements for chat messages

use crate::extraction::normalize;
use crate::extraction::vocabulary::{GENERIC_RESPONSE, RESPONSE_RULES, contains_any};

/// Pick the acknowledgement for a message
///
/// Rules are checked in order (create, urgent, today, tomorrow) and the
/// first one with a matching keyword decides. Any string, including an empty
/// one, gets an answer.
pub fn compose_response(text: &str) -> &'static str {
    let lowered = normalize(text);
    RESPONSE_RULES
        .iter()
        .find(|(keywords, _)| contains_any(&lowered, keywords))
        .map(|(_, response)| *response)
        .unwrap_or(GENERIC_RESPONSE)
}
