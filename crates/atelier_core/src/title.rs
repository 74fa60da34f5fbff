//! Display-title derivation.

/// Derives a short display title from a description: the first four
/// whitespace-delimited tokens, title-cased, joined with single spaces.
///
/// # Examples
///
/// ```
/// use atelier_core::derive_title;
///
/// assert_eq!(
///     derive_title("Create a simple contact form with validation"),
///     "Create A Simple Contact"
/// );
/// ```
pub fn derive_title(description: &str) -> String {
    description
        .split_whitespace()
        .take(4)
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercases the first character of a word and lowercases the rest.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
