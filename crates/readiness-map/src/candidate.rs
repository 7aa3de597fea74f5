//! Normalization of candidate column names from the mapping table.

/// Strips a trailing parenthetical annotation from a candidate column.
///
/// Mapping entries document derivations inline, e.g.
/// `"Name (derived from FirstName+LastName)"`; only the part before `" ("`
/// names a real column.
pub fn normalize_candidate(candidate: &str) -> &str {
    match candidate.find(" (") {
        Some(idx) => candidate[..idx].trim(),
        None => candidate.trim(),
    }
}
