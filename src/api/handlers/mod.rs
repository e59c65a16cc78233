pub mod layout;
pub mod plants;

pub use layout::post_layout;
pub use plants::{get_companions, get_plant, list_plants};
