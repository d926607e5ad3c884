use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Name given to places whose properties carry no `name`.
pub const UNTITLED: &str = "Untitled";

/// A latitude/longitude pair in degrees. Ranges are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Position of a place in the loaded list.
///
/// Source ids may be missing or repeated, so this index is the identity the
/// list rows, markers and drawer refer to. It stays valid until the next load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlaceKey(pub usize);

impl PlaceKey {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One mappable location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub meta: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub book: String,
    pub tags: Vec<String>,
    pub refs: Vec<String>,
    pub position: LatLng,
}

impl Place {
    /// A place at `position` with every property defaulted.
    pub fn at(position: LatLng) -> Self {
        Self {
            id: String::new(),
            name: UNTITLED.to_string(),
            meta: String::new(),
            kind: String::new(),
            book: String::new(),
            tags: Vec::new(),
            refs: Vec::new(),
            position,
        }
    }

    /// Text the search box is matched against: name, meta and tags.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.meta, self.tags.join(" "))
    }
}

/// Distinct facet values present in a dataset, in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSet {
    pub types: BTreeSet<String>,
    pub books: BTreeSet<String>,
}

impl FacetSet {
    pub fn types_vec(&self) -> Vec<String> {
        self.types.iter().cloned().collect()
    }

    pub fn books_vec(&self) -> Vec<String> {
        self.books.iter().cloned().collect()
    }
}

/// Inputs of one filter pass.
///
/// `type_total` and `book_total` are the number of values each facet offers;
/// an empty selection only matches when its facet has no values at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub search: String,
    pub types: BTreeSet<String>,
    pub books: BTreeSet<String>,
    pub type_total: usize,
    pub book_total: usize,
}

impl Filters {
    /// Filters that select every value of `facets` and search for nothing.
    pub fn select_all(facets: &FacetSet) -> Self {
        Self {
            search: String::new(),
            types: facets.types.clone(),
            books: facets.books.clone(),
            type_total: facets.types.len(),
            book_total: facets.books.len(),
        }
    }
}

/// Short summary bound to a marker popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupSummary {
    pub title: String,
    pub meta: String,
}

impl From<&Place> for PopupSummary {
    fn from(place: &Place) -> Self {
        Self {
            title: place.name.clone(),
            meta: place.meta.clone(),
        }
    }
}
