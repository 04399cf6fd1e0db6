/// Canonical, comparison-safe form of a human-entered name.
///
/// Lowercases, trims, and collapses every interior whitespace run into a
/// single space. Total: the empty string maps to itself.
pub fn normalize_name(input: &str) -> String {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
