use std::f64::consts::PI;
use std::time::Duration;

use crate::models::LatLng;

/// Initial and "home" camera position: Jerusalem.
pub const HOME_CENTER: LatLng = LatLng::new(31.778, 35.235);
pub const HOME_ZOOM: f64 = 7.0;
/// Zoom used when focusing a single place.
pub const FOCUS_ZOOM: f64 = 11.0;
/// How long camera moves take.
pub const FLY_DURATION: Duration = Duration::from_millis(800);

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 19.0;

const TILE_SIZE: f64 = 256.0;
const MAX_LATITUDE: f64 = 85.051_128_78;

/// Camera state of the map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center: LatLng,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(HOME_CENTER, HOME_ZOOM)
    }
}

impl Viewport {
    pub fn new(center: LatLng, zoom: f64) -> Self {
        Self {
            center,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn fly_to(&mut self, center: LatLng, zoom: f64) {
        *self = Self::new(center, zoom);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + 1.0).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom - 1.0).max(MIN_ZOOM);
    }

    /// Screen offset of `point` from the center of the view, in logical pixels.
    /// Positive `x` is east, positive `y` is south.
    pub fn offset_of(&self, point: LatLng) -> (f64, f64) {
        let (px, py) = project(point, self.zoom);
        let (cx, cy) = project(self.center, self.zoom);
        (px - cx, py - cy)
    }
}

/// Web Mercator projection to world pixels at `zoom`.
pub fn project(point: LatLng, zoom: f64) -> (f64, f64) {
    let size = TILE_SIZE * 2f64.powf(zoom);
    let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();

    let x = (point.lng + 180.0) / 360.0 * size;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * size;
    (x, y)
}
