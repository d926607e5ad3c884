use slint::SharedString;
use std::cell::RefCell;
use std::rc::Rc;

use bibmap_core::Facet;

use crate::state::{AppState, UiState};
use crate::ui::dialogs::set_status;
use crate::ui::formatting::{facet_option_model, format_match_summary, place_detail};
use crate::ui::types::{PlaceDetail, StatusLevel};
use crate::MainWindow;

/// Re-run the filters after a search or checkbox change.
/// Re-renders both views, then reports how many places match.
pub fn refresh_after_filter_change(main_window: &MainWindow, state: &Rc<RefCell<AppState>>) {
    {
        let mut state_mut = state.borrow_mut();
        let state_mut = &mut *state_mut;
        state_mut.session.refresh(&mut state_mut.views);
    }

    let state_borrow = state.borrow();
    let summary = format_match_summary(
        state_borrow.views.list().row_count(),
        state_borrow.session.places().len(),
    );
    set_status(main_window, summary, StatusLevel::Info);
}

/// Update the UI from the current application state
pub fn update_ui_from_state(main_window: &MainWindow, state: &Rc<RefCell<AppState>>) {
    let state_borrow = state.borrow();

    main_window.set_window_title(SharedString::from(state_borrow.get_window_title()));
    main_window.set_loading(state_borrow.loading);

    // Facet checkboxes
    main_window.set_type_options(facet_option_model(
        &state_borrow.session.facet_options(Facet::Type),
    ));
    main_window.set_book_options(facet_option_model(
        &state_borrow.session.facet_options(Facet::Book),
    ));
    main_window.set_search_text(SharedString::from(state_borrow.session.search()));

    drop(state_borrow);
    update_drawer(main_window, state);
}

/// Show the selected place in the drawer, or hide the drawer
pub fn update_drawer(main_window: &MainWindow, state: &Rc<RefCell<AppState>>) {
    let state_borrow = state.borrow();

    match state_borrow.session.selected_place() {
        Some(place) => {
            main_window.set_drawer(place_detail(place));
            main_window.set_drawer_open(true);
        }
        None => {
            main_window.set_drawer_open(false);
            main_window.set_drawer(PlaceDetail::default());
        }
    }
}

/// Push the shell-only flags to the window
pub fn update_ui_from_ui_state(main_window: &MainWindow, ui_state: &Rc<RefCell<UiState>>) {
    let ui_borrow = ui_state.borrow();

    main_window.set_page(ui_borrow.page);
    main_window.set_sidebar_open(ui_borrow.sidebar_open);
    main_window.set_places_layer_visible(ui_borrow.places_layer_visible);
    main_window.set_routes_layer_visible(ui_borrow.routes_layer_visible);
    main_window.set_popcard_open(ui_borrow.popcard.is_open());
}
