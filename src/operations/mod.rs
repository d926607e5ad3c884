pub mod load_ops;

pub use load_ops::spawn_places_load;
