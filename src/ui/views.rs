use slint::{ComponentHandle, Model, ModelRc, SharedString, VecModel, Weak};
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

use bibmap_core::{LatLng, ListView, MapView, Place, PlaceKey, PopupSummary, Viewport};

use super::formatting::{format_zoom, string_model};
use super::types::{MarkerPin, PlaceRow};
use crate::MainWindow;

/// Sidebar list backed by the window's `places-list` model
pub struct SlintListView {
    rows: Rc<VecModel<PlaceRow>>,
    window: Weak<MainWindow>,
}

impl SlintListView {
    pub fn new(window: &MainWindow) -> Self {
        let rows = Rc::new(VecModel::<PlaceRow>::default());
        window.set_places_list(ModelRc::from(rows.clone()));

        Self {
            rows,
            window: window.as_weak(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.row_count()
    }

    fn set_no_matches(&self, visible: bool) {
        if let Some(window) = self.window.upgrade() {
            window.set_show_no_matches(visible);
        }
    }
}

impl ListView for SlintListView {
    fn clear(&mut self) {
        self.rows.set_vec(Vec::new());
        self.set_no_matches(false);
    }

    fn push_row(&mut self, key: PlaceKey, place: &Place) {
        self.rows.push(PlaceRow {
            key: key.index() as i32,
            name: SharedString::from(place.name.as_str()),
            meta: SharedString::from(place.meta.as_str()),
            tags: string_model(&place.tags),
        });
    }

    fn show_no_matches(&mut self) {
        self.set_no_matches(true);
    }
}

/// Map area backed by the window's `markers` model.
///
/// Markers are rows of the pin model; a marker handle is its row index.
pub struct SlintMapView {
    pins: Rc<VecModel<MarkerPin>>,
    positions: Vec<LatLng>,
    viewport: Viewport,
    window: Weak<MainWindow>,
}

impl SlintMapView {
    pub fn new(window: &MainWindow) -> Self {
        let pins = Rc::new(VecModel::<MarkerPin>::default());
        window.set_markers(ModelRc::from(pins.clone()));

        let view = Self {
            pins,
            positions: Vec::new(),
            viewport: Viewport::default(),
            window: window.as_weak(),
        };
        view.update_zoom_label();
        view
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        self.reposition();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        self.reposition();
    }

    pub fn close_popups(&mut self) {
        for row in 0..self.pins.row_count() {
            self.set_popup(row, false);
        }
    }

    /// Move every pin to its offset under the current viewport
    fn reposition(&mut self) {
        for (row, position) in self.positions.iter().enumerate() {
            let Some(mut pin) = self.pins.row_data(row) else {
                continue;
            };
            let (dx, dy) = self.viewport.offset_of(*position);
            pin.dx = dx as f32;
            pin.dy = dy as f32;
            self.pins.set_row_data(row, pin);
        }
        self.update_zoom_label();
    }

    fn set_popup(&self, row: usize, open: bool) {
        if let Some(mut pin) = self.pins.row_data(row) {
            if pin.popup_open != open {
                pin.popup_open = open;
                self.pins.set_row_data(row, pin);
            }
        }
    }

    fn update_zoom_label(&self) {
        if let Some(window) = self.window.upgrade() {
            window.set_zoom_label(SharedString::from(format_zoom(self.viewport.zoom)));
        }
    }
}

impl MapView for SlintMapView {
    type Marker = usize;

    fn clear_markers(&mut self) {
        self.pins.set_vec(Vec::new());
        self.positions.clear();
    }

    fn add_marker(&mut self, key: PlaceKey, position: LatLng) -> usize {
        let (dx, dy) = self.viewport.offset_of(position);
        self.pins.push(MarkerPin {
            key: key.index() as i32,
            dx: dx as f32,
            dy: dy as f32,
            title: SharedString::default(),
            meta: SharedString::default(),
            popup_open: false,
        });
        self.positions.push(position);
        self.positions.len() - 1
    }

    fn bind_popup(&mut self, marker: &usize, summary: &PopupSummary) {
        if let Some(mut pin) = self.pins.row_data(*marker) {
            pin.title = SharedString::from(summary.title.as_str());
            pin.meta = SharedString::from(summary.meta.as_str());
            self.pins.set_row_data(*marker, pin);
        }
    }

    fn open_popup(&mut self, marker: &usize) {
        for row in 0..self.pins.row_count() {
            self.set_popup(row, row == *marker);
        }
    }

    fn fly_to(&mut self, center: LatLng, zoom: f64, duration: Duration) {
        debug!(%center, zoom, ?duration, "fly to");
        // pins animate their x/y over the same duration in the .slint file
        self.viewport.fly_to(center, zoom);
        self.reposition();
    }
}
