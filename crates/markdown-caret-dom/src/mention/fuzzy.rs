/// Case-insensitive subsequence match of `pattern` against `text`.
///
/// Every non-space character of the pattern must appear in the text in
/// pattern order, each strictly after the previous match. Spaces in the
/// pattern are skipped, so "jo sm" matches "John Smith". An empty pattern
/// matches everything.
pub fn fuzzy_search(pattern: &str, text: &str) -> bool {
    let text = text.to_lowercase();
    let mut remaining = text.chars();
    for needle in pattern.to_lowercase().chars() {
        if needle == ' ' {
            continue;
        }
        // `any` consumes up to and including the match, so the next
        // needle can only be found strictly after it.
        if !remaining.any(|c| c == needle) {
            return false;
        }
    }
    true
}
