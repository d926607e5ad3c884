use std::collections::BTreeSet;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::models::{Filters, Place, PlaceKey};

/// Normalize search text for case-insensitive matching
/// Trims, NFC-normalizes and lowercases
pub fn normalize_search(text: &str) -> String {
    text.trim().nfc().collect::<String>().to_lowercase()
}

/// Return the keys of every place matching `filters`, in list order
pub fn apply_filters(places: &[Place], filters: &Filters) -> Vec<PlaceKey> {
    let needle = normalize_search(&filters.search);

    let visible: Vec<PlaceKey> = places
        .iter()
        .enumerate()
        .filter(|(_, place)| matches_normalized(place, &needle, filters))
        .map(|(index, _)| PlaceKey(index))
        .collect();

    debug!(
        total = places.len(),
        visible = visible.len(),
        search = %needle,
        "applied filters"
    );
    visible
}

/// Check if a place matches the given filters
/// AND logic between search, type and book
pub fn matches_filters(place: &Place, filters: &Filters) -> bool {
    matches_normalized(place, &normalize_search(&filters.search), filters)
}

fn matches_normalized(place: &Place, needle: &str, filters: &Filters) -> bool {
    matches_search(place, needle)
        && matches_facet(&place.kind, &filters.types, filters.type_total)
        && matches_facet(&place.book, &filters.books, filters.book_total)
}

/// Substring match of an already normalized needle against name, meta and tags
pub fn matches_search(place: &Place, needle: &str) -> bool {
    needle.is_empty() || normalize_search(&place.search_text()).contains(needle)
}

/// Facet predicate.
///
/// With something selected the value must be one of the selected ones. With
/// nothing selected, the place only passes when the facet offers no values at
/// all: unchecking every box hides everything, but a dataset that never uses
/// the facet must not be hidden by it.
pub fn matches_facet(value: &str, selected: &BTreeSet<String>, total: usize) -> bool {
    if selected.is_empty() {
        total == 0
    } else {
        selected.contains(value)
    }
}

/// Check if filters narrow the dataset at all
pub fn has_filters(filters: &Filters) -> bool {
    !normalize_search(&filters.search).is_empty()
        || filters.types.len() < filters.type_total
        || filters.books.len() < filters.book_total
}
