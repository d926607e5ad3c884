use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use crate::state::{AppState, UiState};
use crate::ui::update_ui_from_ui_state;
use crate::MainWindow;

/// Register the camera controls, menu button and layer switches
pub fn register_map_handlers(
    window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    ui_state: &Rc<RefCell<UiState>>,
) {
    register_home_view(window, app_state);
    register_zoom(window, app_state);
    register_menu(window, ui_state);
    register_places_layer(window, ui_state);
    register_routes_layer(window, ui_state);
}

/// Register home view button handler
fn register_home_view(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let app_state = app_state.clone();

    window.on_home_clicked(move || {
        app_state.borrow_mut().views.home();
    });
}

/// Register zoom button handlers
fn register_zoom(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    {
        let app_state = app_state.clone();
        window.on_zoom_in(move || {
            app_state.borrow_mut().views.map_mut().zoom_in();
        });
    }

    let app_state = app_state.clone();
    window.on_zoom_out(move || {
        app_state.borrow_mut().views.map_mut().zoom_out();
    });
}

/// Register menu button handler: shows or hides the sidebar
fn register_menu(window: &MainWindow, ui_state: &Rc<RefCell<UiState>>) {
    let main_window_weak = window.as_weak();
    let ui_state = ui_state.clone();

    window.on_menu_clicked(move || {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        {
            let mut ui_mut = ui_state.borrow_mut();
            ui_mut.sidebar_open = !ui_mut.sidebar_open;
        }
        update_ui_from_ui_state(&main_window, &ui_state);
    });
}

/// Register places layer switch handler
fn register_places_layer(window: &MainWindow, ui_state: &Rc<RefCell<UiState>>) {
    let main_window_weak = window.as_weak();
    let ui_state = ui_state.clone();

    window.on_places_layer_toggled(move |visible| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        ui_state.borrow_mut().places_layer_visible = visible;
        update_ui_from_ui_state(&main_window, &ui_state);
    });
}

/// Register routes layer switch handler
fn register_routes_layer(window: &MainWindow, ui_state: &Rc<RefCell<UiState>>) {
    let main_window_weak = window.as_weak();
    let ui_state = ui_state.clone();

    window.on_routes_layer_toggled(move |visible| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        debug!(visible, "routes layer toggled");
        ui_state.borrow_mut().routes_layer_visible = visible;
        update_ui_from_ui_state(&main_window, &ui_state);
    });
}
