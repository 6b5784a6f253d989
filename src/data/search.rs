use tracing::debug;

use crate::core::NameLookup;

/// Names containing `target`, ignoring case, in lookup order.
#[must_use]
pub fn search_names(lookup: &NameLookup, target: &str) -> Vec<String> {
    let needle = target.trim().to_lowercase();
    lookup
        .keys()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Turns a free-text query into an ordered selection of known names.
///
/// Tokens are separated by whitespace and matched case-insensitively.
/// Unknown tokens are dropped and repeated names keep their first position.
#[must_use]
pub fn parse_selection(lookup: &NameLookup, query: &str) -> Vec<String> {
    let mut selection: Vec<String> = Vec::new();
    for token in query.split_whitespace() {
        let Some(name) = resolve_name(lookup, token) else {
            debug!(token, "ignoring unknown name in selection");
            continue;
        };
        if !selection.iter().any(|selected| selected == name) {
            selection.push(name.to_owned());
        }
    }
    selection
}

fn resolve_name<'a>(lookup: &'a NameLookup, token: &str) -> Option<&'a str> {
    if let Some((name, _)) = lookup.get_key_value(token) {
        return Some(name.as_str());
    }
    let folded = token.to_lowercase();
    lookup
        .keys()
        .find(|name| name.to_lowercase() == folded)
        .map(String::as_str)
}
