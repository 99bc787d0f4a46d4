use crate::fertilizing::{Fertilizing, FertilizingDomain, FertilizingError, Plot, PlotId};

impl FertilizingDomain {
    pub fn create_plot<'operation>(
        &'operation mut self,
    ) -> Result<(PlotId, impl FnOnce() -> Vec<Fertilizing> + 'operation), FertilizingError> {
        let id = PlotId(self.plots_sequence + 1);
        let operation = move || {
            self.plots_sequence += 1;
            self.plots.push(Plot {
                id,
                fertilizers: vec![],
            });
            vec![]
        };
        Ok((id, operation))
    }
}
