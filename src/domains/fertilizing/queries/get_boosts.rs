use crate::config::FertilizerConfig;
use crate::fertilizing::{
    FertilizingDomain, FertilizingError, PlotId, QUALITY_FAMILY, SPEED_FAMILY,
    WATER_RETENTION_FAMILY,
};

impl FertilizingDomain {
    /// A tier counts once no matter how often its id repeats, distinct
    /// tiers of the family accumulate. Unknown tokens are ignored.
    pub fn speed_boost_of(&self, config: &FertilizerConfig, fertilizers: &[String]) -> f32 {
        let mut boost = 0.0;
        for (tier, id) in self.families[SPEED_FAMILY].tiers.iter().enumerate() {
            if fertilizers.iter().any(|applied| applied == id) {
                boost += config.fertilizer_speed_boost[tier];
            }
        }
        boost
    }

    pub fn quality_level_of(&self, config: &FertilizerConfig, fertilizers: &[String]) -> i32 {
        let mut level = 0;
        for (tier, id) in self.families[QUALITY_FAMILY].tiers.iter().enumerate() {
            if fertilizers.iter().any(|applied| applied == id) {
                level += config.fertilizer_quality_boost[tier];
            }
        }
        level
    }

    pub fn water_retention_of(&self, config: &FertilizerConfig, fertilizers: &[String]) -> f32 {
        let mut chance = 0.0;
        for (tier, id) in self.families[WATER_RETENTION_FAMILY].tiers.iter().enumerate() {
            if fertilizers.iter().any(|applied| applied == id) {
                chance += config.fertilizer_water_retention_boost[tier];
            }
        }
        chance
    }

    pub fn get_speed_boost(
        &self,
        config: &FertilizerConfig,
        id: PlotId,
    ) -> Result<f32, FertilizingError> {
        let plot = self.get_plot(id)?;
        Ok(self.speed_boost_of(config, &plot.fertilizers))
    }

    pub fn get_quality_level(
        &self,
        config: &FertilizerConfig,
        id: PlotId,
    ) -> Result<i32, FertilizingError> {
        let plot = self.get_plot(id)?;
        Ok(self.quality_level_of(config, &plot.fertilizers))
    }

    pub fn get_water_retention(
        &self,
        config: &FertilizerConfig,
        id: PlotId,
    ) -> Result<f32, FertilizingError> {
        let plot = self.get_plot(id)?;
        Ok(self.water_retention_of(config, &plot.fertilizers))
    }
}
