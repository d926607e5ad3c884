use bibmap_core::{Locator, MapSession, ViewSynchronizer};

use crate::ui::{SlintListView, SlintMapView};

/// Application state management - Domain state only
/// The map session plus the views it renders into
pub struct AppState {
    /// Places, facet selection, search text and drawer
    pub session: MapSession,
    /// Sidebar list and map markers, kept in step by the synchronizer
    pub views: ViewSynchronizer<SlintListView, SlintMapView>,
    /// Where the places dataset is read from
    pub locator: Locator,
    /// Whether the dataset fetch is still in flight
    pub loading: bool,
}

impl AppState {
    pub fn new(locator: Locator, list: SlintListView, map: SlintMapView) -> Self {
        Self {
            session: MapSession::new(),
            views: ViewSynchronizer::new(list, map),
            locator,
            loading: true,
        }
    }

    /// Get window title with the dataset name and a loading indicator
    pub fn get_window_title(&self) -> String {
        let source = match &self.locator {
            Locator::File(path) => path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("places")
                .to_string(),
            Locator::Http(url) => url.rsplit('/').next().unwrap_or(url).to_string(),
        };

        let loading_marker = if self.loading { " (loading…)" } else { "" };

        format!("BibleMapped - {}{}", source, loading_marker)
    }
}
