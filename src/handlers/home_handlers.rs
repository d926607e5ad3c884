use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

use bibmap_core::ClickTarget;

use crate::state::UiState;
use crate::ui::{set_status, update_ui_from_ui_state};
use crate::{MainWindow, Page, StatusLevel};

/// Register page switching and the home page controls
pub fn register_home_handlers(window: &MainWindow, ui_state: &Rc<RefCell<UiState>>) {
    register_show_page(window, ui_state);
    register_hotspot(window, ui_state);
    register_outside_click(window, ui_state);
    register_home_search(window);
}

/// Register page switch handler
fn register_show_page(window: &MainWindow, ui_state: &Rc<RefCell<UiState>>) {
    let main_window_weak = window.as_weak();
    let ui_state = ui_state.clone();

    window.on_show_page(move |page| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        {
            let mut ui_mut = ui_state.borrow_mut();
            ui_mut.page = page;
            if page == Page::Map {
                // the pop card belongs to the home page
                ui_mut.popcard.click(ClickTarget::Elsewhere);
            }
        }
        update_ui_from_ui_state(&main_window, &ui_state);
    });
}

/// Register hotspot handler: opens or closes the pop card
fn register_hotspot(window: &MainWindow, ui_state: &Rc<RefCell<UiState>>) {
    let main_window_weak = window.as_weak();
    let ui_state = ui_state.clone();

    window.on_hotspot_clicked(move || {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        ui_state.borrow_mut().popcard.toggle();
        update_ui_from_ui_state(&main_window, &ui_state);
    });
}

/// Register click-outside handler for the pop card
fn register_outside_click(window: &MainWindow, ui_state: &Rc<RefCell<UiState>>) {
    let main_window_weak = window.as_weak();
    let ui_state = ui_state.clone();

    window.on_outside_clicked(move || {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        let changed = ui_state.borrow_mut().popcard.click(ClickTarget::Elsewhere);
        if changed {
            update_ui_from_ui_state(&main_window, &ui_state);
        }
    });
}

/// Register home page search button handler
fn register_home_search(window: &MainWindow) {
    let main_window_weak = window.as_weak();

    window.on_home_search_clicked(move || {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        set_status(
            &main_window,
            "Search is coming soon. Use the map sidebar to search places.",
            StatusLevel::Info,
        );
    });
}
