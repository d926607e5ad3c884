use slint::{SharedString, Weak};

use bibmap_core::{LoadError, LoadNotifier, Locator};

use super::types::{StatusLevel, StatusMessage};
use crate::errors::map_load_error;
use crate::MainWindow;

/// Helper function to set status message with semantic level
pub fn set_status(window: &MainWindow, text: impl Into<SharedString>, level: StatusLevel) {
    window.set_status(StatusMessage {
        text: text.into(),
        level,
    });
}

/// Helper function to show error dialog
pub fn show_error(
    window: &MainWindow,
    title: impl Into<SharedString>,
    message: impl Into<SharedString>,
    details: impl Into<SharedString>,
) {
    window.set_error_title(title.into());
    window.set_error_message(message.into());
    window.set_error_details(details.into());
    window.set_show_error_dialog(true);
}

/// Helper function to hide error dialog
pub fn hide_error(window: &MainWindow) {
    window.set_show_error_dialog(false);
}

/// Shows a failed load as a blocking error dialog
pub struct ErrorDialog<'a> {
    window: Weak<MainWindow>,
    locator: &'a Locator,
}

impl<'a> ErrorDialog<'a> {
    pub fn new(window: Weak<MainWindow>, locator: &'a Locator) -> Self {
        Self { window, locator }
    }
}

impl LoadNotifier for ErrorDialog<'_> {
    fn load_failed(&mut self, error: &LoadError) {
        let Some(window) = self.window.upgrade() else {
            return;
        };
        let (title, message, details) = map_load_error(error, self.locator);
        show_error(&window, title, message.clone(), details);
        set_status(&window, message, StatusLevel::Error);
    }
}
