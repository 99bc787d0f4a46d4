use crate::api::ActionError;
use crate::fertilizing::PlotId;
use crate::FertilizerMod;

impl FertilizerMod {
    pub fn hoe_plot(&mut self) -> Result<PlotId, ActionError> {
        let (id, create) = self.fertilizing.create_plot()?;
        create();
        Ok(id)
    }
}
