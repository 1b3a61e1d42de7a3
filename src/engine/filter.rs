//! Pure filter/sort engine over space lists.
//!
//! This module implements the heart of the picker: a pure function that takes a
//! list of [`Space`] records and [`FilterOptions`] and produces a filtered,
//! stably sorted list. The input list is never mutated; callers receive a new
//! ordered sequence.
//!
//! All filter fields are closed enums rather than open string maps, so an
//! invalid access filter or sort key is unrepresentable.

use crate::domain::Space;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Access-type filter applied before sorting.
///
/// `All` keeps every space. `Public`/`Private` keep only spaces whose access
/// mode matches exactly; a space without an access mode matches no specific
/// filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessFilter {
    /// Keep every space regardless of access mode.
    #[default]
    All,
    /// Keep only spaces with public access.
    Public,
    /// Keep only spaces with private access.
    Private,
}

/// Sort key for the filtered list.
///
/// `Created` and `Usage` are accepted but compare equal: the backing data
/// model carries no creation or usage fields yet, and the placeholder ordering
/// is preserved deliberately rather than invented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Case-insensitive comparison of the display label.
    #[default]
    Name,
    /// Placeholder: compares equal until creation timestamps exist.
    Created,
    /// Placeholder: compares equal until usage figures exist.
    Usage,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order (reverses the comparator).
    Desc,
}

/// Options controlling one filter/sort pass.
///
/// Created with [`Default`] at session start and mutated only through the
/// picker's update events. Defaults: empty query, all access types, name
/// ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Case-insensitive substring query matched against name and identifier.
    pub query: String,

    /// Access-type filter.
    pub access: AccessFilter,

    /// Sort key for the surviving spaces.
    pub sort_by: SortKey,

    /// Sort direction.
    pub order: SortOrder,
}

/// Filters and stably sorts a list of spaces.
///
/// The query matches case-insensitively as a substring of the space name (when
/// present) or the identifier; a nameless space is matched only by identifier.
/// Access filtering keeps exact matches only. Sorting is stable, so spaces
/// with equal keys keep their input order, and `Desc` reverses the comparator.
///
/// The input slice is not mutated; a new ordered `Vec` of clones is returned.
/// Empty input yields empty output, as does a query that matches nothing.
///
/// # Examples
///
/// ```
/// use spacepicker::engine::{filter_spaces, FilterOptions, SortOrder};
/// use spacepicker::domain::Space;
///
/// let spaces = vec![
///     Space::new("1").with_name("Zebra"),
///     Space::new("2").with_name("Apple"),
/// ];
///
/// let sorted = filter_spaces(&spaces, &FilterOptions::default());
/// assert_eq!(sorted[0].name.as_deref(), Some("Apple"));
///
/// let opts = FilterOptions {
///     order: SortOrder::Desc,
///     ..FilterOptions::default()
/// };
/// let reversed = filter_spaces(&spaces, &opts);
/// assert_eq!(reversed[0].name.as_deref(), Some("Zebra"));
/// ```
#[must_use]
pub fn filter_spaces(spaces: &[Space], opts: &FilterOptions) -> Vec<Space> {
    let query = opts.query.to_lowercase();

    let mut filtered: Vec<Space> = spaces
        .iter()
        .filter(|space| matches_access(space, opts.access) && matches_query(space, &query))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| {
        let ordering = match opts.sort_by {
            SortKey::Name => a.sort_key().cmp(&b.sort_key()),
            SortKey::Created | SortKey::Usage => Ordering::Equal,
        };
        match opts.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    filtered
}

/// Whether a space passes the access-type filter.
fn matches_access(space: &Space, filter: AccessFilter) -> bool {
    use crate::domain::AccessType;

    match filter {
        AccessFilter::All => true,
        AccessFilter::Public => space.access == Some(AccessType::Public),
        AccessFilter::Private => space.access == Some(AccessType::Private),
    }
}

/// Whether a space matches the lowercased query string.
fn matches_query(space: &Space, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let name_matches = space
        .name
        .as_ref()
        .is_some_and(|name| name.to_lowercase().contains(query));

    name_matches || space.id.to_lowercase().contains(query)
}

/// Computes byte ranges of case-insensitive substring matches for highlighting.
///
/// Returns `(start, end)` byte ranges (exclusive end) into `text` for each
/// non-overlapping occurrence of `query`. An empty query yields no ranges.
/// Matching is performed on per-character lowercase folds, so multi-byte
/// characters keep correct byte offsets.
///
/// # Examples
///
/// ```
/// use spacepicker::engine::match_ranges;
///
/// assert_eq!(match_ranges("Apple Pie", "p"), vec![(1, 2), (2, 3), (6, 7)]);
/// assert_eq!(match_ranges("Zebra", "EB"), vec![(1, 3)]);
/// assert!(match_ranges("Zebra", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let haystack: Vec<(usize, char)> = text
        .char_indices()
        .map(|(offset, c)| (offset, fold_char(c)))
        .collect();
    let needle: Vec<char> = query.chars().map(fold_char).collect();

    if needle.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        let window = &haystack[i..i + needle.len()];
        if window.iter().map(|(_, c)| *c).eq(needle.iter().copied()) {
            let start = window[0].0;
            let end = haystack
                .get(i + needle.len())
                .map_or(text.len(), |(offset, _)| *offset);
            ranges.push((start, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }

    ranges
}

/// Single-character lowercase fold used for query matching.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccessType;
    use proptest::prelude::*;

    fn fixture() -> Vec<Space> {
        vec![
            Space::new("1").with_name("Zebra").with_access(AccessType::Public),
            Space::new("2").with_name("Apple").with_access(AccessType::Private),
            Space::new("did:key:zmystery"),
            Space::new("4").with_name("apricot"),
        ]
    }

    #[test]
    fn default_options_return_name_sorted_permutation() {
        let spaces = fixture();
        let result = filter_spaces(&spaces, &FilterOptions::default());
        assert_eq!(result.len(), spaces.len());

        let labels: Vec<String> = result.iter().map(Space::display_name).collect();
        assert_eq!(labels, ["Apple", "apricot", "Zebra", "zmystery"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(filter_spaces(&[], &FilterOptions::default()).is_empty());
    }

    #[test]
    fn query_matches_name_case_insensitively() {
        let opts = FilterOptions {
            query: "APP".to_string(),
            ..FilterOptions::default()
        };
        let result = filter_spaces(&fixture(), &opts);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");
    }

    #[test]
    fn nameless_space_matches_only_by_id() {
        let opts = FilterOptions {
            query: "mystery".to_string(),
            ..FilterOptions::default()
        };
        let result = filter_spaces(&fixture(), &opts);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "did:key:zmystery");
    }

    #[test]
    fn query_matching_nothing_yields_empty_output() {
        let opts = FilterOptions {
            query: "quux".to_string(),
            ..FilterOptions::default()
        };
        assert!(filter_spaces(&fixture(), &opts).is_empty());
    }

    #[test]
    fn access_filter_keeps_exact_matches_only() {
        let opts = FilterOptions {
            access: AccessFilter::Private,
            ..FilterOptions::default()
        };
        let result = filter_spaces(&fixture(), &opts);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "2");

        let opts = FilterOptions {
            access: AccessFilter::Public,
            ..FilterOptions::default()
        };
        let result = filter_spaces(&fixture(), &opts);
        assert!(result.iter().all(|s| s.access == Some(AccessType::Public)));
        // Spaces without an access mode match no specific filter.
        assert!(!result.iter().any(|s| s.id == "did:key:zmystery"));
    }

    #[test]
    fn created_and_usage_keys_preserve_input_order() {
        let spaces = fixture();
        for sort_by in [SortKey::Created, SortKey::Usage] {
            let opts = FilterOptions {
                sort_by,
                ..FilterOptions::default()
            };
            let result = filter_spaces(&spaces, &opts);
            let ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
            assert_eq!(ids, ["1", "2", "did:key:zmystery", "4"]);
        }
    }

    #[test]
    fn descending_reverses_name_order() {
        let spaces = vec![
            Space::new("1").with_name("Zebra"),
            Space::new("2").with_name("Apple"),
        ];
        let opts = FilterOptions {
            order: SortOrder::Desc,
            ..FilterOptions::default()
        };
        let result = filter_spaces(&spaces, &opts);
        let labels: Vec<String> = result.iter().map(Space::display_name).collect();
        assert_eq!(labels, ["Zebra", "Apple"]);
    }

    #[test]
    fn input_list_is_not_mutated() {
        let spaces = vec![
            Space::new("1").with_name("Zebra"),
            Space::new("2").with_name("Apple"),
        ];
        let before = spaces.clone();
        let _ = filter_spaces(&spaces, &FilterOptions::default());
        assert_eq!(spaces, before);
    }

    #[test]
    fn match_ranges_finds_substring_occurrences() {
        assert_eq!(match_ranges("banana", "an"), vec![(1, 3), (3, 5)]);
        assert_eq!(match_ranges("Apple", "apple"), vec![(0, 5)]);
        assert!(match_ranges("Apple", "xyz").is_empty());
        assert!(match_ranges("", "a").is_empty());
    }

    fn space_strategy() -> impl Strategy<Value = Space> {
        (
            "[a-z0-9]{1,8}",
            proptest::option::of("[A-Za-z ]{1,12}"),
            proptest::option::of(prop_oneof![
                Just(AccessType::Public),
                Just(AccessType::Private)
            ]),
        )
            .prop_map(|(id, name, access)| Space {
                id,
                name,
                access,
            })
    }

    proptest! {
        #[test]
        fn identity_filter_is_a_permutation(spaces in proptest::collection::vec(space_strategy(), 0..16)) {
            let result = filter_spaces(&spaces, &FilterOptions::default());

            let mut expected: Vec<&str> = spaces.iter().map(|s| s.id.as_str()).collect();
            let mut actual: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
            expected.sort_unstable();
            actual.sort_unstable();
            prop_assert_eq!(expected, actual);
        }

        #[test]
        fn name_sort_is_idempotent(spaces in proptest::collection::vec(space_strategy(), 0..16)) {
            let opts = FilterOptions::default();
            let once = filter_spaces(&spaces, &opts);
            let twice = filter_spaces(&once, &opts);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn private_filter_excludes_public_spaces(spaces in proptest::collection::vec(space_strategy(), 0..16)) {
            let opts = FilterOptions {
                access: AccessFilter::Private,
                ..FilterOptions::default()
            };
            let result = filter_spaces(&spaces, &opts);
            prop_assert!(result.iter().all(|s| s.access == Some(AccessType::Private)));
        }
    }
}
