use crate::api::{ActionError, Event};
use crate::fertilizing::{CropState, PlotId};
use crate::{occur, FertilizerMod};

impl FertilizerMod {
    pub fn apply_fertilizer(
        &mut self,
        plot: PlotId,
        item: &str,
        crop: Option<CropState>,
    ) -> Result<Vec<Event>, ActionError> {
        let apply = self
            .fertilizing
            .apply_fertilizer(&self.config, plot, item, crop)?;
        let events = occur![apply(), Event::ApplySoundTriggered { plot },];
        Ok(events)
    }
}
