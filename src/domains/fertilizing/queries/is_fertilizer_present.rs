use crate::fertilizing::{FertilizingDomain, PlotId};

impl FertilizingDomain {
    /// Exact token membership over the parsed sequence, false for tiles
    /// which were never hoed.
    pub fn is_fertilizer_present(&self, id: PlotId, item: &str) -> bool {
        let item = Self::qualify(item);
        match self.get_plot(id) {
            Ok(plot) => plot.fertilizers.iter().any(|applied| applied == &item),
            Err(_) => false,
        }
    }
}
