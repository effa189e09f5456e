//! Case-insensitive substring search over one field.

use crate::value::Value;

/// Returns `true` if the field's text contains `term`, ignoring case.
///
/// An empty term matches everything.
pub fn matches_term(value: &Value<'_>, term: &str) -> bool {
    term.is_empty() || contains_folded(&value.to_search_text(), &term.to_lowercase())
}

fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    haystack.to_lowercase().contains(folded_needle)
}

/// Keeps the records whose `field` contains `term`, preserving order.
///
/// An empty term returns the input unchanged rather than an empty result.
pub fn search_refs<'a, T, F>(items: &[&'a T], field: &str, term: &str, accessor: F) -> Vec<&'a T>
where
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .copied()
        .filter(|item| contains_folded(&accessor(*item, field).to_search_text(), &needle))
        .collect()
}

/// [`search_refs`] over an owned slice.
pub fn search<'a, T, F>(items: &'a [T], field: &str, term: &str, accessor: F) -> Vec<&'a T>
where
    for<'b> F: Fn(&'b T, &str) -> Value<'b>,
{
    let refs: Vec<&'a T> = items.iter().collect();
    search_refs(&refs, field, term, accessor)
}
