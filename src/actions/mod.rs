pub use apply_fertilizer::*;
pub use harvest_crop::*;
pub use hoe_plot::*;
pub use register_fertilizer::*;
pub use season_update::*;

mod apply_fertilizer;
mod harvest_crop;
mod hoe_plot;
mod register_fertilizer;
mod season_update;
