use crate::api::{ActionError, Event};
use crate::fertilizing::{regrow_counter_after_harvest, CropState, Fertilizing, PlotId};
use crate::{occur, FertilizerMod};

impl FertilizerMod {
    /// Keeps the speed boost working for regrowing crops. Called by the
    /// host right after a harvest, when the crop counter sits at the
    /// regrow boundary.
    pub fn harvest_crop(
        &mut self,
        plot: PlotId,
        crop: CropState,
    ) -> Result<Vec<Event>, ActionError> {
        if !self.config.speed_remain_after_harvest {
            return Ok(vec![]);
        }
        let regrow_days = match crop.regrow_days {
            Some(days) if days > 0 => days,
            _ => return Ok(vec![]),
        };
        if crop.day_of_current_phase != regrow_days {
            return Ok(vec![]);
        }
        let boost = self.fertilizing.get_speed_boost(&self.config, plot)?;
        let day = regrow_counter_after_harvest(regrow_days, boost);
        let events = occur![vec![Fertilizing::RegrowthChanged { plot, day }],];
        Ok(events)
    }
}
