//! Text normalization for keyword matching
//!
//! Matching is case-insensitive throughout the engine. Rather than lowering
//! every keyword comparison, the message is lowered once here and the
//! original text is kept alongside it for title derivation.

/// Lower-case `text` for keyword matching
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// A message in both its original and its normalized form
#[derive(Debug, Clone)]
pub struct NormalizedText<'a> {
    pub original: &'a str,
    pub lowered: String,
}

impl<'a> NormalizedText<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            lowered: normalize(original),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_without_trimming() {
        assert_eq!(normalize("  Call The CLIENT "), "  call the client ");
    }

    #[test]
    fn test_normalized_text_keeps_original() {
        let text = NormalizedText::new("Review Q3 Numbers");
        assert_eq!(text.original, "Review Q3 Numbers");
        assert_eq!(text.lowered, "review q3 numbers");
    }
}
