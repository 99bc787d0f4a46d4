pub use apply_fertilizer::*;
pub use clear_fertilizer::*;
pub use create_plot::*;

mod apply_fertilizer;
mod clear_fertilizer;
mod create_plot;
