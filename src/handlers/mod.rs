pub mod dialog_handlers;
pub mod filter_handlers;
pub mod home_handlers;
pub mod map_handlers;
pub mod place_handlers;

pub use dialog_handlers::register_dialog_handlers;
pub use filter_handlers::register_filter_handlers;
pub use home_handlers::register_home_handlers;
pub use map_handlers::register_map_handlers;
pub use place_handlers::register_place_handlers;
