//! Splitting free-text descriptions into comment lines.

const ABBREVIATION: &str = "e.g.";
const RESTORED: &str = "e.g. ";
const MASK: &str = "\u{0}eg\u{0}";

/// Split text into one line per sentence.
///
/// Sentences end at `. ` or a newline. The abbreviation `e.g.` is never a
/// boundary and is always written back followed by one space. Lines are
/// trimmed, empty lines dropped, and every line ends with a period.
///
/// ```
/// use obsgen_core::emit::docs::sentences;
///
/// assert_eq!(
///     sentences("Name of a source, e.g. a camera. Must exist"),
///     vec!["Name of a source, e.g. a camera.", "Must exist."]
/// );
/// ```
pub fn sentences(text: &str) -> Vec<String> {
    text.replace(RESTORED, MASK)
        .replace(ABBREVIATION, MASK)
        .lines()
        .flat_map(|line| line.split(". "))
        .map(|line| line.replace(MASK, RESTORED))
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.ends_with('.') {
                line
            } else {
                format!("{line}.")
            }
        })
        .collect()
}

/// Sentence lines of a field description. Newlines inside the description
/// are treated as spaces.
pub fn field_sentences(description: &str) -> Vec<String> {
    sentences(&description.replace('\n', " "))
}
