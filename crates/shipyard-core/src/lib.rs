pub mod assembly;
pub mod category;
pub mod error;
pub mod loader;
pub mod report;

pub use assembly::{ShipAssembly, WEAPON_SLOTS};
pub use category::{Category, ALL_CATEGORIES, SINGULAR_CATEGORIES};
pub use error::{Result, ShipyardError};
pub use loader::load_lines;
pub use report::render;
