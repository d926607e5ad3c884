pub mod dialogs;
pub mod formatting;
pub mod types;
pub mod updates;
pub mod views;

pub use dialogs::{hide_error, set_status, ErrorDialog};
pub use formatting::{current_year, format_footer, home_section_model};
pub use updates::{
    refresh_after_filter_change, update_drawer, update_ui_from_state, update_ui_from_ui_state,
};
pub use views::{SlintListView, SlintMapView};
