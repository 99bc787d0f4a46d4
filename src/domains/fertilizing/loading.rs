use crate::fertilizing::{FertilizingDomain, Plot, PlotId};

pub const FERTILIZER_SEPARATOR: char = '|';

impl FertilizingDomain {
    pub fn load_plots(&mut self, plots: Vec<Plot>, sequence: usize) {
        self.plots_sequence = sequence;
        self.plots.extend(plots);
    }
}

impl Plot {
    pub fn from_save(id: PlotId, value: &str) -> Plot {
        Plot {
            id,
            fertilizers: decode_fertilizers(value),
        }
    }

    pub fn to_save(&self) -> String {
        encode_fertilizers(&self.fertilizers)
    }
}

pub fn decode_fertilizers(value: &str) -> Vec<String> {
    value
        .split(FERTILIZER_SEPARATOR)
        .filter(|token| !token.is_empty())
        .map(String::from)
        .collect()
}

pub fn encode_fertilizers(fertilizers: &[String]) -> String {
    fertilizers.join("|")
}
