//! Keeps the list and the map showing the same places.
//!
//! Both views are rebuilt from scratch on every render. Marker handles are
//! kept here, keyed by [`PlaceKey`], so places never hold on to their marker.

use std::collections::HashMap;
use std::time::Duration;

use crate::models::{LatLng, Place, PlaceKey, PopupSummary};
use crate::viewport::{FLY_DURATION, FOCUS_ZOOM, HOME_CENTER, HOME_ZOOM};

/// The sidebar list of places.
pub trait ListView {
    /// Drop every row and any placeholder.
    fn clear(&mut self);
    /// Append a row that can request focus on `key`.
    fn push_row(&mut self, key: PlaceKey, place: &Place);
    /// Show the "no matches" placeholder.
    fn show_no_matches(&mut self);
}

/// The marker layer and camera of the map widget.
pub trait MapView {
    type Marker;

    fn clear_markers(&mut self);
    fn add_marker(&mut self, key: PlaceKey, position: LatLng) -> Self::Marker;
    fn bind_popup(&mut self, marker: &Self::Marker, summary: &PopupSummary);
    fn open_popup(&mut self, marker: &Self::Marker);
    fn fly_to(&mut self, center: LatLng, zoom: f64, duration: Duration);
}

/// Owns a list view and a map view and renders the same subset to both.
pub struct ViewSynchronizer<L: ListView, M: MapView> {
    list: L,
    map: M,
    markers: HashMap<PlaceKey, M::Marker>,
}

impl<L: ListView, M: MapView> ViewSynchronizer<L, M> {
    pub fn new(list: L, map: M) -> Self {
        Self {
            list,
            map,
            markers: HashMap::new(),
        }
    }

    /// Replace both views with the places in `visible`.
    ///
    /// Keys that do not index into `places` are ignored by both views.
    pub fn render(&mut self, places: &[Place], visible: &[PlaceKey]) {
        self.list.clear();
        self.map.clear_markers();
        self.markers.clear();

        let mut shown = 0;
        for &key in visible {
            let Some(place) = places.get(key.index()) else {
                continue;
            };

            self.list.push_row(key, place);

            let marker = self.map.add_marker(key, place.position);
            self.map.bind_popup(&marker, &PopupSummary::from(place));
            self.markers.insert(key, marker);
            shown += 1;
        }

        if shown == 0 {
            self.list.show_no_matches();
        }
    }

    /// Center the map on `place` and open its popup if it has a marker.
    pub fn focus(&mut self, key: PlaceKey, place: &Place) {
        self.map.fly_to(place.position, FOCUS_ZOOM, FLY_DURATION);
        if let Some(marker) = self.markers.get(&key) {
            self.map.open_popup(marker);
        }
    }

    /// Return the camera to the default view.
    pub fn home(&mut self) {
        self.map.fly_to(HOME_CENTER, HOME_ZOOM, FLY_DURATION);
    }

    pub fn marker(&self, key: PlaceKey) -> Option<&M::Marker> {
        self.markers.get(&key)
    }

    /// Keys that currently have a marker, sorted.
    pub fn visible_keys(&self) -> Vec<PlaceKey> {
        let mut keys: Vec<_> = self.markers.keys().copied().collect();
        keys.sort();
        keys
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// List view that records what it was told to show.
    #[derive(Debug, Default)]
    pub struct RecordingList {
        pub rows: Vec<PlaceKey>,
        pub placeholder: bool,
        pub clears: usize,
    }

    impl ListView for RecordingList {
        fn clear(&mut self) {
            self.rows.clear();
            self.placeholder = false;
            self.clears += 1;
        }

        fn push_row(&mut self, key: PlaceKey, _place: &Place) {
            self.rows.push(key);
        }

        fn show_no_matches(&mut self) {
            self.placeholder = true;
        }
    }

    /// Map view that records markers, popups and camera moves.
    #[derive(Debug, Default)]
    pub struct RecordingMap {
        pub markers: Vec<(PlaceKey, LatLng)>,
        pub popups: HashMap<usize, PopupSummary>,
        pub opened: Vec<usize>,
        pub flights: Vec<(LatLng, f64)>,
    }

    impl MapView for RecordingMap {
        type Marker = usize;

        fn clear_markers(&mut self) {
            self.markers.clear();
            self.popups.clear();
        }

        fn add_marker(&mut self, key: PlaceKey, position: LatLng) -> usize {
            self.markers.push((key, position));
            self.markers.len() - 1
        }

        fn bind_popup(&mut self, marker: &usize, summary: &PopupSummary) {
            self.popups.insert(*marker, summary.clone());
        }

        fn open_popup(&mut self, marker: &usize) {
            self.opened.push(*marker);
        }

        fn fly_to(&mut self, center: LatLng, zoom: f64, _duration: Duration) {
            self.flights.push((center, zoom));
        }
    }

    impl RecordingMap {
        pub fn keys(&self) -> Vec<PlaceKey> {
            let mut keys: Vec<_> = self.markers.iter().map(|(k, _)| *k).collect();
            keys.sort();
            keys
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{RecordingList, RecordingMap};
    use super::*;

    fn places() -> Vec<Place> {
        ["Bethlehem", "Nazareth", "Capernaum"]
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let mut place = Place::at(LatLng::new(31.0 + i as f64, 35.0));
                place.name = name.to_string();
                place.meta = format!("meta {i}");
                place
            })
            .collect()
    }

    fn synchronizer() -> ViewSynchronizer<RecordingList, RecordingMap> {
        ViewSynchronizer::new(RecordingList::default(), RecordingMap::default())
    }

    #[test]
    fn test_list_and_map_show_the_same_keys() {
        let places = places();
        let mut views = synchronizer();

        views.render(&places, &[PlaceKey(2), PlaceKey(0)]);

        let mut rows = views.list().rows.clone();
        rows.sort();
        assert_eq!(rows, views.map().keys());
        assert_eq!(views.visible_keys(), vec![PlaceKey(0), PlaceKey(2)]);
        assert!(!views.list().placeholder);
    }

    #[test]
    fn test_render_replaces_previous_state() {
        let places = places();
        let mut views = synchronizer();

        views.render(&places, &[PlaceKey(0), PlaceKey(1), PlaceKey(2)]);
        views.render(&places, &[PlaceKey(1)]);

        assert_eq!(views.list().rows, vec![PlaceKey(1)]);
        assert_eq!(views.map().keys(), vec![PlaceKey(1)]);
        assert_eq!(views.visible_keys(), vec![PlaceKey(1)]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let places = places();
        let mut views = synchronizer();

        views.render(&places, &[PlaceKey(0), PlaceKey(2)]);
        let first = (views.list().rows.clone(), views.map().keys());
        views.render(&places, &[PlaceKey(0), PlaceKey(2)]);

        assert_eq!((views.list().rows.clone(), views.map().keys()), first);
        assert_eq!(views.list().clears, 2);
    }

    #[test]
    fn test_empty_subset_shows_placeholder_and_clears_markers() {
        let places = places();
        let mut views = synchronizer();

        views.render(&places, &[PlaceKey(0)]);
        views.render(&places, &[]);

        assert!(views.list().placeholder);
        assert!(views.list().rows.is_empty());
        assert!(views.map().markers.is_empty());
        assert!(views.visible_keys().is_empty());
    }

    #[test]
    fn test_unknown_keys_are_skipped_by_both_views() {
        let places = places();
        let mut views = synchronizer();

        views.render(&places, &[PlaceKey(9)]);

        assert!(views.list().placeholder);
        assert!(views.map().markers.is_empty());
    }

    #[test]
    fn test_popups_summarize_name_and_meta() {
        let places = places();
        let mut views = synchronizer();

        views.render(&places, &[PlaceKey(1)]);

        let marker = *views.marker(PlaceKey(1)).unwrap();
        let popup = &views.map().popups[&marker];
        assert_eq!(popup.title, "Nazareth");
        assert_eq!(popup.meta, "meta 1");
    }

    #[test]
    fn test_focus_flies_and_opens_popup() {
        let places = places();
        let mut views = synchronizer();
        views.render(&places, &[PlaceKey(0), PlaceKey(1)]);

        views.focus(PlaceKey(1), &places[1]);

        assert_eq!(views.map().flights, vec![(places[1].position, FOCUS_ZOOM)]);
        assert_eq!(views.map().opened, vec![1]);
    }

    #[test]
    fn test_focus_on_hidden_place_only_moves_camera() {
        let places = places();
        let mut views = synchronizer();
        views.render(&places, &[PlaceKey(0)]);

        views.focus(PlaceKey(2), &places[2]);

        assert_eq!(views.map().flights.len(), 1);
        assert!(views.map().opened.is_empty());
    }

    #[test]
    fn test_home_returns_to_default_view() {
        let mut views = synchronizer();
        views.home();
        assert_eq!(views.map().flights, vec![(HOME_CENTER, HOME_ZOOM)]);
    }
}
