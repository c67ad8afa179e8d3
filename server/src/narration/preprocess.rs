//! Narration text preprocessing
//!
//! Study content arrives as lightly marked-up text; the speech API wants
//! plain sentences with abbreviations it can pronounce. Deterministic so
//! equal inputs hit the same cache entry.

use crate::narration::NarrationError;

/// Upstream speech APIs cap input length; keep a margin below it.
pub const MAX_TEXT_LEN: usize = 4000;

/// Abbreviations common in Life in UK content, expanded for pronunciation.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("UK", "United Kingdom"),
    ("MP", "Member of Parliament"),
    ("MPs", "Members of Parliament"),
    ("NHS", "National Health Service"),
    ("GP", "general practitioner"),
    ("PM", "Prime Minister"),
    ("AD", "A D"),
    ("BC", "B C"),
    ("ECHR", "European Convention on Human Rights"),
    ("RAF", "Royal Air Force"),
];

/// Characters carrying markdown emphasis/structure, stripped wholesale.
const MARKUP: &[char] = &['*', '_', '#', '`', '>', '~'];

/// Normalize raw study text for synthesis.
pub fn prepare_text(raw: &str) -> Result<String, NarrationError> {
    let stripped: String = raw.chars().filter(|c| !MARKUP.contains(c)).collect();

    let words: Vec<String> = stripped
        .split_whitespace()
        .map(expand_word)
        .collect();
    let text = words.join(" ");

    if text.is_empty() {
        return Err(NarrationError::EmptyText);
    }
    if text.len() > MAX_TEXT_LEN {
        return Err(NarrationError::TextTooLong { len: text.len(), max: MAX_TEXT_LEN });
    }
    Ok(text)
}

/// Expand one whitespace-delimited word, preserving leading/trailing
/// punctuation (e.g. "UK," -> "United Kingdom,").
fn expand_word(word: &str) -> String {
    let start = word.find(|c: char| c.is_alphanumeric());
    let end = word.rfind(|c: char| c.is_alphanumeric());
    let (Some(start), Some(end)) = (start, end) else {
        return word.to_string();
    };

    let (head, rest) = word.split_at(start);
    let (core, tail) = rest.split_at(end + 1 - start);

    match ABBREVIATIONS.iter().find(|(abbr, _)| *abbr == core) {
        Some((_, expansion)) => format!("{head}{expansion}{tail}"),
        None => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace() {
        let text = prepare_text("The  Union\n\nFlag").unwrap();
        assert_eq!(text, "The Union Flag");
    }

    #[test]
    fn test_strips_markup() {
        let text = prepare_text("**Magna Carta** was signed in `1215`").unwrap();
        assert_eq!(text, "Magna Carta was signed in 1215");
    }

    #[test]
    fn test_expands_abbreviations_with_punctuation() {
        let text = prepare_text("Living in the UK, you may visit a GP.").unwrap();
        assert_eq!(
            text,
            "Living in the United Kingdom, you may visit a general practitioner."
        );
    }

    #[test]
    fn test_does_not_expand_inside_words() {
        // "UKRAINE" must not become "United KingdomRAINE".
        let text = prepare_text("UKRAINE").unwrap();
        assert_eq!(text, "UKRAINE");
    }

    #[test]
    fn test_empty_after_cleanup_is_error() {
        assert!(matches!(prepare_text("  **  "), Err(NarrationError::EmptyText)));
    }

    #[test]
    fn test_too_long_is_error() {
        let long = "word ".repeat(1500);
        assert!(matches!(
            prepare_text(&long),
            Err(NarrationError::TextTooLong { .. })
        ));
    }
}
