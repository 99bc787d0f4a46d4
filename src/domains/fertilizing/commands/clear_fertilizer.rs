use crate::fertilizing::{Fertilizing, FertilizingDomain, FertilizingError, PlotId};

impl FertilizingDomain {
    pub fn clear_fertilizer<'operation>(
        &'operation mut self,
        id: PlotId,
    ) -> Result<impl FnOnce() -> Vec<Fertilizing> + 'operation, FertilizingError> {
        let plot = self.get_plot_mut(id)?;
        let operation = move || {
            plot.fertilizers.clear();
            vec![Fertilizing::PlotChanged {
                plot: id,
                fertilizers: String::new(),
            }]
        };
        Ok(operation)
    }
}
