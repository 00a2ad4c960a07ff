//! Text helpers.

/// Count-prefixed label, adding an `s` unless the count is exactly one.
///
/// ```
/// use shoe_card::text::pluralize;
/// assert_eq!(pluralize("Color", 1), "1 Color");
/// assert_eq!(pluralize("Color", 0), "0 Colors");
/// ```
pub fn pluralize(word: &str, count: u32) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{} {}{}", count, word, suffix)
}
