use log::debug;

use crate::config::{FertilizerConfig, FertilizerMode};
use crate::fertilizing::{
    encode_fertilizers, regrow_counter_on_boost_change, CropState, Fertilizing, FertilizingDomain,
    FertilizingError, PlotId, BASIC_FERTILIZER, QUALITY_FERTILIZER,
};

impl FertilizingDomain {
    /// Decides whether the candidate fertilizer may join the plot under the
    /// active combination mode and prepares the new state. The plot is
    /// mutated by the returned operation only, a rejection leaves it as is.
    pub fn apply_fertilizer<'operation>(
        &'operation mut self,
        config: &FertilizerConfig,
        id: PlotId,
        item: &str,
        crop: Option<CropState>,
    ) -> Result<impl FnOnce() -> Vec<Fertilizing> + 'operation, FertilizingError> {
        let candidate = Self::qualify(item);
        if !config.enable_always_fertilizer {
            if let Some(crop) = &crop {
                if crop.current_phase != 0
                    && (candidate == BASIC_FERTILIZER || candidate == QUALITY_FERTILIZER)
                {
                    return Err(FertilizingError::CropAlreadySprouted { plot: id });
                }
            }
        }
        let plot = self.get_plot(id)?;
        if plot.fertilizers.iter().any(|applied| applied == &candidate) {
            return Err(FertilizingError::HasThisFertilizer { plot: id });
        }
        let fertilizers = match config.fertilizer_mode {
            FertilizerMode::MultiStack => {
                let mut fertilizers = plot.fertilizers.clone();
                fertilizers.push(candidate);
                fertilizers
            }
            FertilizerMode::MultiSingleLevel => {
                let mut fertilizers = plot.fertilizers.clone();
                match self.find_family(&candidate) {
                    Some(family) => {
                        let same_family = fertilizers
                            .iter()
                            .position(|applied| family.tiers.contains(applied));
                        match same_family {
                            Some(index) => fertilizers[index] = candidate,
                            None => fertilizers.push(candidate),
                        }
                    }
                    None => fertilizers.push(candidate),
                }
                fertilizers
            }
            FertilizerMode::SingleStack => {
                let compatible = match self.find_family(&candidate) {
                    Some(family) => plot
                        .fertilizers
                        .iter()
                        .all(|applied| family.tiers.contains(applied)),
                    None => plot.fertilizers.is_empty(),
                };
                if !compatible {
                    return Err(FertilizingError::HasAnotherFertilizer { plot: id });
                }
                let mut fertilizers = plot.fertilizers.clone();
                fertilizers.push(candidate);
                fertilizers
            }
            FertilizerMode::SingleReplace => vec![candidate],
            FertilizerMode::Vanilla => {
                if !plot.fertilizers.is_empty() {
                    return Err(FertilizingError::HasAnotherFertilizer { plot: id });
                }
                vec![candidate]
            }
        };
        let regrowth = match &crop {
            Some(crop) if config.speed_remain_after_harvest && crop.day_of_current_phase != 0 => {
                match crop.regrow_days {
                    Some(days) if days > 0 => {
                        let boost = self.speed_boost_of(config, &fertilizers);
                        Some(regrow_counter_on_boost_change(days, boost))
                    }
                    _ => None,
                }
            }
            _ => None,
        };
        let plot = self.get_plot_mut(id)?;
        let operation = move || {
            plot.fertilizers = fertilizers;
            let state = encode_fertilizers(&plot.fertilizers);
            debug!("Fertilizer value: {}", state);
            let mut events = vec![Fertilizing::PlotChanged {
                plot: id,
                fertilizers: state,
            }];
            if let Some(day) = regrowth {
                events.push(Fertilizing::RegrowthChanged { plot: id, day });
            }
            events
        };
        Ok(operation)
    }
}
