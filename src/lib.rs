pub use domains::*;

use log::info;

use crate::config::FertilizerConfig;
use crate::fertilizing::{FertilizingDomain, PlotId};

mod actions;
pub mod api;
pub mod config;
mod domains;
pub mod view;

#[macro_export]
macro_rules! occur {
    [ $( $event:expr, )* ] => {
        vec![ $( $event.into(), )* ]
    };
}

pub struct FertilizerMod {
    pub config: FertilizerConfig,
    pub fertilizing: FertilizingDomain,
}

impl FertilizerMod {
    pub fn new(config: FertilizerConfig) -> Self {
        info!("Fertilizer mod is now working, {:?}", config.fertilizer_mode);
        Self {
            config,
            fertilizing: FertilizingDomain::default(),
        }
    }

    /// Swaps the whole policy at once. Plots fertilized under the previous
    /// policy keep their state, only subsequent operations see the change.
    pub fn reload_config(&mut self, config: FertilizerConfig) {
        info!("Reloads config, {:?}", config.fertilizer_mode);
        self.config = config;
    }

    pub fn is_fertilizer_present(&self, plot: PlotId, item: &str) -> bool {
        self.fertilizing.is_fertilizer_present(plot, item)
    }
}
