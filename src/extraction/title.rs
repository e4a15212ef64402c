//! Title derivation
//!
//! The title is what is left of the message once the phrases people use to
//! introduce a task ("remind me to", "create a task to") are removed.

use super::normalize::normalize;
use super::vocabulary::{ARTICLES, INTRO_PHRASES, TASK_FILLERS};

/// Derive a task title from a non-empty message
///
/// Each introduction phrase found in the message is removed once, in table
/// order. Removing a phrase lowers the working copy, so a message with no
/// introduction phrase keeps its original casing. One leading article is
/// then dropped, plus one leading filler ("task to ") if a phrase was
/// removed, and the first letter is capitalized.
///
/// Phrases are matched as substrings, so "address" loses its "add".
///
/// When stripping consumes the whole message ("todo") the title is the
/// trimmed message itself rather than an empty string, so a non-empty
/// message always yields a non-empty title.
pub fn extract_title(text: &str) -> String {
    let mut working = text.trim().to_string();
    let mut phrase_removed = false;

    for phrase in INTRO_PHRASES {
        let lowered = normalize(&working);
        if lowered.contains(phrase) {
            working = lowered.replacen(phrase, "", 1).trim().to_string();
            phrase_removed = true;
        }
    }

    let mut stripped = strip_prefix_ignore_case(working.trim(), ARTICLES);
    if phrase_removed {
        stripped = strip_prefix_ignore_case(stripped, TASK_FILLERS);
    }

    if stripped.is_empty() {
        capitalize(text.trim())
    } else {
        capitalize(stripped)
    }
}

/// Drop the first of `prefixes` that starts `text`, ignoring ASCII case
fn strip_prefix_ignore_case<'a>(text: &'a str, prefixes: &[&str]) -> &'a str {
    for prefix in prefixes {
        if let Some(head) = text.get(..prefix.len())
            && head.eq_ignore_ascii_case(prefix)
        {
            return text[prefix.len()..].trim();
        }
    }
    text
}

/// Upper-case the first character, leaving the rest untouched
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
