use std::collections::BTreeMap;
use tracing::{error, info};

use crate::drawer::DrawerState;
use crate::error::LoadError;
use crate::facets::collect_facets;
use crate::filtering::apply_filters;
use crate::models::{FacetSet, Filters, Place, PlaceKey};
use crate::sync::{ListView, MapView, ViewSynchronizer};

/// Receives the user-visible notice that loading failed.
pub trait LoadNotifier {
    fn load_failed(&mut self, error: &LoadError);
}

/// Which of the two facets a selection change refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Type,
    Book,
}

/// State of the map page: the loaded places, their facets, the current search
/// and facet selection, and the detail drawer.
#[derive(Debug, Default)]
pub struct MapSession {
    places: Vec<Place>,
    facets: FacetSet,
    types: BTreeMap<String, bool>,
    books: BTreeMap<String, bool>,
    search: String,
    drawer: DrawerState,
}

impl MapSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dataset. Facets are derived here and nowhere else, and every
    /// facet value starts out selected.
    pub fn load(&mut self, places: Vec<Place>) {
        self.facets = collect_facets(&places);
        self.types = self.facets.types.iter().map(|t| (t.clone(), true)).collect();
        self.books = self.facets.books.iter().map(|b| (b.clone(), true)).collect();
        self.places = places;
        self.drawer.close();
    }

    /// Take the outcome of a load and bring the views in line with it.
    ///
    /// A failed load leaves the session empty, shows the "no matches" state
    /// and raises exactly one notification.
    pub fn apply_load_result<L, M, N>(
        &mut self,
        result: Result<Vec<Place>, LoadError>,
        views: &mut ViewSynchronizer<L, M>,
        notifier: &mut N,
    ) where
        L: ListView,
        M: MapView,
        N: LoadNotifier + ?Sized,
    {
        match result {
            Ok(places) => {
                self.load(places);
                info!(
                    places = self.places.len(),
                    types = self.facets.types.len(),
                    books = self.facets.books.len(),
                    "map session ready"
                );
            }
            Err(err) => {
                error!(error = %err, "map failed to load");
                self.load(Vec::new());
                notifier.load_failed(&err);
            }
        }
        self.refresh(views);
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn place(&self, key: PlaceKey) -> Option<&Place> {
        self.places.get(key.index())
    }

    pub fn facets(&self) -> &FacetSet {
        &self.facets
    }

    /// Facet values in display order with their checkbox state.
    pub fn facet_options(&self, facet: Facet) -> Vec<(String, bool)> {
        self.selection(facet)
            .iter()
            .map(|(value, checked)| (value.clone(), *checked))
            .collect()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Check or uncheck one facet value. Values the dataset does not offer are
    /// ignored.
    pub fn set_selected(&mut self, facet: Facet, value: &str, selected: bool) {
        if let Some(state) = self.selection_mut(facet).get_mut(value) {
            *state = selected;
        }
    }

    pub fn set_all_selected(&mut self, facet: Facet, selected: bool) {
        for state in self.selection_mut(facet).values_mut() {
            *state = selected;
        }
    }

    fn selection(&self, facet: Facet) -> &BTreeMap<String, bool> {
        match facet {
            Facet::Type => &self.types,
            Facet::Book => &self.books,
        }
    }

    fn selection_mut(&mut self, facet: Facet) -> &mut BTreeMap<String, bool> {
        match facet {
            Facet::Type => &mut self.types,
            Facet::Book => &mut self.books,
        }
    }

    /// Snapshot of the current search and facet selection.
    pub fn filters(&self) -> Filters {
        let checked = |selection: &BTreeMap<String, bool>| {
            selection
                .iter()
                .filter(|(_, checked)| **checked)
                .map(|(value, _)| value.clone())
                .collect()
        };

        Filters {
            search: self.search.clone(),
            types: checked(&self.types),
            books: checked(&self.books),
            type_total: self.types.len(),
            book_total: self.books.len(),
        }
    }

    pub fn visible(&self) -> Vec<PlaceKey> {
        apply_filters(&self.places, &self.filters())
    }

    /// Run the filters and push the result to both views.
    pub fn refresh<L: ListView, M: MapView>(&self, views: &mut ViewSynchronizer<L, M>) {
        let visible = self.visible();
        views.render(&self.places, &visible);
    }

    /// Open `key` in the drawer and focus it on the map. Unknown keys are
    /// ignored.
    pub fn select<L: ListView, M: MapView>(
        &mut self,
        key: PlaceKey,
        views: &mut ViewSynchronizer<L, M>,
    ) -> Option<&Place> {
        let place = self.places.get(key.index())?;
        self.drawer.open(key);
        views.focus(key, place);
        Some(place)
    }

    pub fn drawer(&self) -> DrawerState {
        self.drawer
    }

    pub fn close_drawer(&mut self) {
        self.drawer.close();
    }

    pub fn selected_place(&self) -> Option<&Place> {
        self.drawer.selected().and_then(|key| self.place(key))
    }
}
