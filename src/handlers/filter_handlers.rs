use slint::{ComponentHandle, Model};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

use bibmap_core::Facet;

use crate::state::AppState;
use crate::ui::refresh_after_filter_change;
use crate::MainWindow;

/// Register the search box and facet checkbox handlers
pub fn register_filter_handlers(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    register_search_edited(window, app_state);
    register_facet_toggled(window, app_state, Facet::Type);
    register_facet_toggled(window, app_state, Facet::Book);
}

/// Register search text handler
fn register_search_edited(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    window.on_search_edited(move |text| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        app_state.borrow_mut().session.set_search(text.as_str());
        refresh_after_filter_change(&main_window, &app_state);
    });
}

/// Register a checkbox handler for one facet group
fn register_facet_toggled(window: &MainWindow, app_state: &Rc<RefCell<AppState>>, facet: Facet) {
    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();

    let handler = move |index: i32, checked: bool| {
        let Some(main_window) = main_window_weak.upgrade() else {
            return;
        };

        // Resolve the row to its label through the model the checkboxes render
        let options = match facet {
            Facet::Type => main_window.get_type_options(),
            Facet::Book => main_window.get_book_options(),
        };
        let Some(option) = usize::try_from(index).ok().and_then(|i| options.row_data(i)) else {
            return;
        };
        debug!(?facet, value = %option.label, checked, "facet toggled");

        app_state
            .borrow_mut()
            .session
            .set_selected(facet, option.label.as_str(), checked);
        refresh_after_filter_change(&main_window, &app_state);
    };

    match facet {
        Facet::Type => window.on_type_toggled(handler),
        Facet::Book => window.on_book_toggled(handler),
    }
}
