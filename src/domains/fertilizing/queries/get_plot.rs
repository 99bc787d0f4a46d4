use crate::fertilizing::{FertilizingDomain, FertilizingError, Plot, PlotId};

impl FertilizingDomain {
    pub fn get_plot(&self, id: PlotId) -> Result<&Plot, FertilizingError> {
        self.plots
            .iter()
            .find(|plot| plot.id == id)
            .ok_or(FertilizingError::PlotNotFound { plot: id })
    }

    pub fn get_plot_mut(&mut self, id: PlotId) -> Result<&mut Plot, FertilizingError> {
        self.plots
            .iter_mut()
            .find(|plot| plot.id == id)
            .ok_or(FertilizingError::PlotNotFound { plot: id })
    }
}
