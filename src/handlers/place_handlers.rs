use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

use bibmap_core::PlaceKey;

use crate::state::AppState;
use crate::ui::update_drawer;
use crate::MainWindow;

/// Register list row, marker, map background and drawer handlers
pub fn register_place_handlers(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    register_place_selected(window, app_state);
    register_marker_clicked(window, app_state);
    register_map_clicked(window, app_state);
    register_drawer_close(window, app_state);
}

/// Open the drawer on `key` and fly the map to it
fn select_place(main_window: &MainWindow, app_state: &Rc<RefCell<AppState>>, key: i32) {
    let Ok(index) = usize::try_from(key) else {
        warn!(key, "ignoring selection with a negative key");
        return;
    };

    {
        let mut state_mut = app_state.borrow_mut();
        let state_mut = &mut *state_mut;
        match state_mut.session.select(PlaceKey(index), &mut state_mut.views) {
            Some(place) => debug!(name = %place.name, "place selected"),
            None => {
                warn!(index, "ignoring selection of an unknown place");
                return;
            }
        }
    }

    update_drawer(main_window, app_state);
}

/// Register sidebar row click handler
fn register_place_selected(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_place_selected(move |key| {
        if let Some(main_window) = main_window_weak.upgrade() {
            select_place(&main_window, &app_state, key);
        }
    });
}

/// Register marker click handler
fn register_marker_clicked(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_marker_clicked(move |key| {
        if let Some(main_window) = main_window_weak.upgrade() {
            select_place(&main_window, &app_state, key);
        }
    });
}

/// Register map background click handler: closes any open popup
fn register_map_clicked(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let app_state = app_state.clone();

    window.on_map_clicked(move || {
        app_state.borrow_mut().views.map_mut().close_popups();
    });
}

/// Register drawer close button handler
fn register_drawer_close(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_drawer_close(move || {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        app_state.borrow_mut().session.close_drawer();
        update_drawer(&main_window, &app_state);
    });
}
