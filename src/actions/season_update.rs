use crate::api::{ActionError, Event};
use crate::fertilizing::PlotId;
use crate::{occur, FertilizerMod};

impl FertilizerMod {
    /// Season transition hook. Fertilizer survives a fresh save load and,
    /// if the keep policy is set, the season change itself.
    pub fn season_update(
        &mut self,
        plot: PlotId,
        on_load: bool,
    ) -> Result<Vec<Event>, ActionError> {
        if self.config.enable_keep_fertilizer_across_season || on_load {
            return Ok(vec![]);
        }
        let clear = self.fertilizing.clear_fertilizer(plot)?;
        let events = occur![clear(),];
        Ok(events)
    }
}
