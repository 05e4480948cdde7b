use super::parser::TermDescriptor;

/// Stable three-way partition of an AND clause: excluded, then plain, then
/// exact. A descriptor flagged both ways lands with the excluded ones.
pub fn reorder_buckets(terms: Vec<TermDescriptor>) -> Vec<TermDescriptor> {
    let (excluded, rest): (Vec<_>, Vec<_>) = terms.into_iter().partition(|t| t.exclude);
    let (exact, plain): (Vec<_>, Vec<_>) = rest.into_iter().partition(|t| t.exact);
    excluded.into_iter().chain(plain).chain(exact).collect()
}

/// Lowercase and collapse every whitespace run to a single space, trimming
/// both ends.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
