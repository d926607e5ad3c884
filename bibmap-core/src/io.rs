//! Loading the places dataset.
//!
//! The dataset is a GeoJSON `FeatureCollection`. It is read from either an
//! HTTP(S) URL or a local file, picked by [`Locator::parse`].

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

use crate::error::LoadError;
use crate::models::{LatLng, Place, UNTITLED};

/// Where the map page loads its places from when nothing else is configured.
pub const DEFAULT_PLACES_LOCATOR: &str = "maps/navigator/places.geojson";

/// A resolved dataset location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locator {
    Http(String),
    File(PathBuf),
}

impl Locator {
    /// `http://` and `https://` strings are fetched over the network, anything
    /// else is treated as a file path.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Http(trimmed.to_string())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }

    /// Build the source that reads this location.
    pub fn source(&self) -> Result<Box<dyn PlacesSource>, LoadError> {
        Ok(match self {
            Self::Http(url) => Box::new(HttpPlacesSource::new(url.clone())?),
            Self::File(path) => Box::new(FilePlacesSource::new(path.clone())),
        })
    }
}

impl Default for Locator {
    fn default() -> Self {
        Self::parse(DEFAULT_PLACES_LOCATOR)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Something that can hand back the raw bytes of the places document.
#[async_trait(?Send)]
pub trait PlacesSource {
    /// Human readable location, used in logs and error messages.
    fn locator(&self) -> String;
    /// Fetch the whole document.
    async fn fetch(&self) -> Result<Vec<u8>, LoadError>;
}

/// HTTP implementation of [`PlacesSource`].
///
/// Every request asks intermediaries not to serve a cached copy.
#[derive(Debug)]
pub struct HttpPlacesSource {
    client: Client,
    url: String,
}

impl HttpPlacesSource {
    pub fn new(url: impl Into<String>) -> Result<Self, LoadError> {
        let url = url.into();
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|source| LoadError::Transport {
                locator: url.clone(),
                source,
            })?;
        Ok(Self { client, url })
    }
}

#[async_trait(?Send)]
impl PlacesSource for HttpPlacesSource {
    fn locator(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        let transport = |source| LoadError::Transport {
            locator: self.url.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.url)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                locator: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;
        Ok(body.to_vec())
    }
}

/// Local file implementation of [`PlacesSource`].
#[derive(Debug, Clone)]
pub struct FilePlacesSource {
    path: PathBuf,
}

impl FilePlacesSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait(?Send)]
impl PlacesSource for FilePlacesSource {
    fn locator(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<u8>, LoadError> {
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

/// Fetch and parse the places document behind `source`.
pub async fn load_places(source: &dyn PlacesSource) -> Result<Vec<Place>, LoadError> {
    let bytes = source.fetch().await?;
    let places = parse_places(&bytes)?;
    info!(locator = %source.locator(), count = places.len(), "loaded places");
    Ok(places)
}

/// Load the places behind `locator` on the calling thread.
///
/// Spins up a single-threaded runtime for the one fetch, so it must not be
/// called from inside another tokio runtime.
pub fn load_places_blocking(locator: &Locator) -> Result<Vec<Place>, LoadError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| LoadError::Interrupted(err.to_string()))?;

    let source = locator.source()?;
    runtime.block_on(load_places(source.as_ref()))
}

/// Parse a GeoJSON feature collection into places.
///
/// Only `Point` features are kept. Missing or mistyped properties fall back to
/// their defaults instead of failing the whole document.
pub fn parse_places(bytes: &[u8]) -> Result<Vec<Place>, LoadError> {
    let document: Value = serde_json::from_slice(bytes)?;

    let Some(features) = document.get("features").and_then(Value::as_array) else {
        return Ok(Vec::new());
    };

    Ok(features
        .iter()
        .enumerate()
        .filter_map(|(index, feature)| place_from_feature(index, feature))
        .collect())
}

fn place_from_feature(index: usize, feature: &Value) -> Option<Place> {
    let geometry = feature.get("geometry")?;
    if geometry.get("type").and_then(Value::as_str) != Some("Point") {
        return None;
    }

    let Some(position) = point_position(geometry) else {
        warn!(feature = index, "skipping point feature without usable coordinates");
        return None;
    };

    let empty = Map::new();
    let properties = feature
        .get("properties")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    Some(Place {
        id: id_property(properties).unwrap_or_default(),
        name: string_property(properties, "name").unwrap_or_else(|| UNTITLED.to_string()),
        meta: string_property(properties, "meta").unwrap_or_default(),
        kind: string_property(properties, "type").unwrap_or_default(),
        book: string_property(properties, "book").unwrap_or_default(),
        tags: list_property(properties, "tags"),
        refs: list_property(properties, "refs"),
        position,
    })
}

// GeoJSON positions are [longitude, latitude, ...]
fn point_position(geometry: &Value) -> Option<LatLng> {
    let coordinates = geometry.get("coordinates").and_then(Value::as_array)?;
    match coordinates.as_slice() {
        [lng, lat, ..] => match (lat.as_f64(), lng.as_f64()) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
            _ => None,
        },
        _ => None,
    }
}

fn string_property(properties: &Map<String, Value>, key: &str) -> Option<String> {
    properties
        .get(key)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
}

// Numeric ids are common in hand-written GeoJSON.
fn id_property(properties: &Map<String, Value>) -> Option<String> {
    match properties.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn list_property(properties: &Map<String, Value>, key: &str) -> Vec<String> {
    properties
        .get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}
