pub mod link;
pub mod listing;
pub mod naming;

pub use link::{place, PlaceOptions, Placement};
pub use listing::{list_classes, list_files};
pub use naming::resolve_base_dir;
