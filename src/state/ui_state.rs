use bibmap_core::ToggleCard;

use crate::ui::types::Page;

/// UI flow state management
/// This struct contains only shell state that no core type owns
#[derive(Debug)]
pub struct UiState {
    /// Page currently shown
    pub page: Page,
    /// Whether the filter sidebar is shown
    pub sidebar_open: bool,
    /// Whether place markers are drawn
    pub places_layer_visible: bool,
    /// Whether the routes overlay is drawn; the dataset carries no routes yet
    pub routes_layer_visible: bool,
    /// The home page pop card
    pub popcard: ToggleCard,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            sidebar_open: true,
            places_layer_visible: true,
            routes_layer_visible: false,
            popcard: ToggleCard::default(),
        }
    }
}
