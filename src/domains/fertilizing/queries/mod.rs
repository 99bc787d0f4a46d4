pub use get_boosts::*;
pub use get_plot::*;
pub use is_fertilizer_present::*;

mod get_boosts;
mod get_plot;
mod is_fertilizer_present;
