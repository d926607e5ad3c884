// Public modules
pub mod drawer;
pub mod error;
pub mod facets;
pub mod filtering;
pub mod home;
pub mod io;
pub mod models;
pub mod session;
pub mod sync;
pub mod viewport;

// Re-export commonly used types for convenience
pub use drawer::{ClickTarget, DrawerState, ToggleCard};
pub use error::LoadError;
pub use facets::collect_facets;
pub use filtering::{apply_filters, has_filters, matches_filters, normalize_search};
pub use home::{home_sections, HomeCard, HomeSection};
pub use io::{
    load_places, load_places_blocking, parse_places, FilePlacesSource, HttpPlacesSource, Locator,
    PlacesSource, DEFAULT_PLACES_LOCATOR,
};
pub use models::{FacetSet, Filters, LatLng, Place, PlaceKey, PopupSummary};
pub use session::{Facet, LoadNotifier, MapSession};
pub use sync::{ListView, MapView, ViewSynchronizer};
pub use viewport::Viewport;
