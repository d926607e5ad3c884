use crate::models::{FacetSet, Place};

/// Collect the distinct non-empty `type` and `book` values of `places`.
///
/// Values come back sorted so the filter checkboxes keep a stable order. This
/// runs once per load: which facets exist is fixed by the full dataset, only
/// their selection changes afterwards.
pub fn collect_facets(places: &[Place]) -> FacetSet {
    let mut facets = FacetSet::default();

    for place in places {
        if !place.kind.is_empty() {
            facets.types.insert(place.kind.clone());
        }
        if !place.book.is_empty() {
            facets.books.insert(place.book.clone());
        }
    }

    facets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LatLng;

    fn place(kind: &str, book: &str) -> Place {
        let mut place = Place::at(LatLng::new(0.0, 0.0));
        place.kind = kind.to_string();
        place.book = book.to_string();
        place
    }

    #[test]
    fn test_facets_are_sorted_and_deduplicated() {
        let places = vec![
            place("city", "Matthew"),
            place("city", "Luke"),
            place("mountain", "Luke"),
        ];

        let facets = collect_facets(&places);
        assert_eq!(facets.types_vec(), vec!["city", "mountain"]);
        assert_eq!(facets.books_vec(), vec!["Luke", "Matthew"]);
    }

    #[test]
    fn test_empty_values_are_not_facets() {
        let places = vec![place("", "Acts"), place("", "")];

        let facets = collect_facets(&places);
        assert!(facets.types.is_empty());
        assert_eq!(facets.books_vec(), vec!["Acts"]);
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        let places = vec![place("river", ""), place("Region", "")];
        assert_eq!(collect_facets(&places).types_vec(), vec!["Region", "river"]);
    }
}
