//! Pure list algebra over username collections
//!
//! All three functions are total and referentially transparent: same
//! inputs, same outputs, no side effects. Order from the source is
//! preserved throughout and duplicates are never collapsed, since the
//! paginated source API does not guarantee uniqueness.

use std::collections::HashSet;

/// Every element of `following` not present anywhere in `followers`.
///
/// Order-preserving relative to `following`. Duplicate entries are each
/// tested independently and kept. Membership is exact string equality;
/// `followers` is collected into a set for O(1) lookup.
pub fn non_reciprocating(following: &[String], followers: &[String]) -> Vec<String> {
    let follower_set: HashSet<&str> = followers.iter().map(String::as_str).collect();
    following
        .iter()
        .filter(|user| !follower_set.contains(user.as_str()))
        .cloned()
        .collect()
}

/// Every element of `candidates` not present in `excluded`.
///
/// Order-preserving, duplicates kept. An empty `excluded` list is the
/// identity on `candidates`.
pub fn exclude_listed(candidates: &[String], excluded: &[String]) -> Vec<String> {
    let excluded_set: HashSet<&str> = excluded.iter().map(String::as_str).collect();
    candidates
        .iter()
        .filter(|user| !excluded_set.contains(user.as_str()))
        .cloned()
        .collect()
}

/// Split a comma-delimited list, trimming each piece and dropping pieces
/// that become empty after trimming. Blank or whitespace-only input
/// yields an empty list. No deduplication.
pub fn parse_delimited_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
