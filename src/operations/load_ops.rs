use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use tokio::sync::oneshot;
use tracing::{error, info};

use bibmap_core::{load_places_blocking, LoadError, Place};

use crate::state::AppState;
use crate::ui::{set_status, update_ui_from_state, ErrorDialog};
use crate::{MainWindow, StatusLevel};

/// Fetch the places dataset off the UI thread and apply it when it arrives.
///
/// The fetch runs once per launch and is not cancelled.
pub fn spawn_places_load(window: &MainWindow, app_state: &Rc<RefCell<AppState>>) {
    let locator = app_state.borrow().locator.clone();
    info!(%locator, "loading places");
    set_status(window, format!("Loading places from {}", locator), StatusLevel::Info);

    let (sender, receiver) = oneshot::channel();
    let worker_locator = locator.clone();
    let spawned = thread::Builder::new()
        .name("places-loader".to_string())
        .spawn(move || {
            // The receiver only goes away when the window has closed
            let _ = sender.send(load_places_blocking(&worker_locator));
        });

    if let Err(err) = spawned {
        error!(error = %err, "could not start the loader thread");
        apply_result(
            window,
            app_state,
            Err(LoadError::Interrupted(err.to_string())),
        );
        return;
    }

    let main_window_weak = window.as_weak();
    let app_state = app_state.clone();
    let task = slint::spawn_local(async move {
        let result = receiver
            .await
            .unwrap_or_else(|_| Err(LoadError::Interrupted("loader thread exited".to_string())));

        if let Some(main_window) = main_window_weak.upgrade() {
            apply_result(&main_window, &app_state, result);
        }
    });

    if let Err(err) = task {
        error!(error = %err, "could not schedule the load result");
    }
}

fn apply_result(
    main_window: &MainWindow,
    app_state: &Rc<RefCell<AppState>>,
    result: Result<Vec<Place>, LoadError>,
) {
    let succeeded = result.is_ok();
    {
        let mut state_mut = app_state.borrow_mut();
        let state_mut = &mut *state_mut;
        let mut dialog = ErrorDialog::new(main_window.as_weak(), &state_mut.locator);
        state_mut
            .session
            .apply_load_result(result, &mut state_mut.views, &mut dialog);
        state_mut.loading = false;
    }

    update_ui_from_state(main_window, app_state);

    if succeeded {
        let count = app_state.borrow().session.places().len();
        set_status(
            main_window,
            format!("Loaded {} places", count),
            StatusLevel::Success,
        );
    }
}
