use clap::Parser;
use std::cell::RefCell;
use std::rc::Rc;

slint::include_modules!();

mod config;
mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use config::{init_tracing, Config};
use handlers::*;
use operations::spawn_places_load;
use state::{AppState, UiState};
use ui::{
    current_year, format_footer, home_section_model, update_ui_from_state,
    update_ui_from_ui_state, SlintListView, SlintMapView,
};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing(&config.log)?;

    let main_window = MainWindow::new()?;

    // Views own the window models they render into
    let list = SlintListView::new(&main_window);
    let map = SlintMapView::new(&main_window);
    let app_state = Rc::new(RefCell::new(AppState::new(config.locator(), list, map)));
    let ui_state = Rc::new(RefCell::new(UiState::new()));

    main_window.set_home_sections(home_section_model(bibmap_core::home_sections()));
    main_window.set_footer_text(format_footer(current_year()).into());
    update_ui_from_state(&main_window, &app_state);
    update_ui_from_ui_state(&main_window, &ui_state);

    // Register all handlers
    register_filter_handlers(&main_window, &app_state);
    register_place_handlers(&main_window, &app_state);
    register_map_handlers(&main_window, &app_state, &ui_state);
    register_home_handlers(&main_window, &ui_state);
    register_dialog_handlers(&main_window);

    spawn_places_load(&main_window, &app_state);

    main_window.run()?;
    Ok(())
}
