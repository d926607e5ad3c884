//! View and notifier fakes shared by the integration tests.
#![allow(dead_code)]

use bibmap_core::models::LatLng;
use bibmap_core::{ListView, LoadError, LoadNotifier, MapView, Place, PlaceKey, PopupSummary};

#[derive(Default)]
pub struct Rows {
    pub keys: Vec<PlaceKey>,
    pub no_matches: bool,
}

impl ListView for Rows {
    fn clear(&mut self) {
        self.keys.clear();
        self.no_matches = false;
    }

    fn push_row(&mut self, key: PlaceKey, _place: &Place) {
        self.keys.push(key);
    }

    fn show_no_matches(&mut self) {
        self.no_matches = true;
    }
}

#[derive(Default)]
pub struct Pins {
    pub keys: Vec<PlaceKey>,
}

impl MapView for Pins {
    type Marker = PlaceKey;

    fn clear_markers(&mut self) {
        self.keys.clear();
    }

    fn add_marker(&mut self, key: PlaceKey, _position: LatLng) -> PlaceKey {
        self.keys.push(key);
        key
    }

    fn bind_popup(&mut self, _marker: &PlaceKey, _summary: &PopupSummary) {}

    fn open_popup(&mut self, _marker: &PlaceKey) {}

    fn fly_to(&mut self, _center: LatLng, _zoom: f64, _duration: std::time::Duration) {}
}

#[derive(Default)]
pub struct Alerts(pub usize);

impl LoadNotifier for Alerts {
    fn load_failed(&mut self, _error: &LoadError) {
        self.0 += 1;
    }
}
