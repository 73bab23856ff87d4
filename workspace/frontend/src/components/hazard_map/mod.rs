mod filter_bar;
pub mod leaflet;
mod view;

pub use view::{HazardMap, MapHandle};
