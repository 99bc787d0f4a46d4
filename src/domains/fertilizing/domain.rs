use log::info;
use serde::{Deserialize, Serialize};

pub const ITEM_QUALIFIER: &str = "(O)";

pub const SPEED_GRO: &str = "(O)465";
pub const DELUXE_SPEED_GRO: &str = "(O)466";
pub const HYPER_SPEED_GRO: &str = "(O)918";

pub const BASIC_FERTILIZER: &str = "(O)368";
pub const QUALITY_FERTILIZER: &str = "(O)369";
pub const DELUXE_FERTILIZER: &str = "(O)919";

pub const BASIC_RETAINING_SOIL: &str = "(O)370";
pub const QUALITY_RETAINING_SOIL: &str = "(O)371";
pub const DELUXE_RETAINING_SOIL: &str = "(O)920";

// Built-in family indexes, only these three carry boost tables.
pub const SPEED_FAMILY: usize = 0;
pub const QUALITY_FAMILY: usize = 1;
pub const WATER_RETENTION_FAMILY: usize = 2;

/// One fertilizer category, ordered by potency: basic, quality, deluxe.
#[derive(Debug, Clone)]
pub struct FertilizerFamily {
    pub tiers: [String; 3],
}

pub struct FertilizingDomain {
    pub families: Vec<FertilizerFamily>,
    pub plots: Vec<Plot>,
    pub plots_sequence: usize,
}

impl Default for FertilizingDomain {
    fn default() -> Self {
        Self {
            families: vec![
                FertilizerFamily {
                    tiers: [
                        SPEED_GRO.to_string(),
                        DELUXE_SPEED_GRO.to_string(),
                        HYPER_SPEED_GRO.to_string(),
                    ],
                },
                FertilizerFamily {
                    tiers: [
                        BASIC_FERTILIZER.to_string(),
                        QUALITY_FERTILIZER.to_string(),
                        DELUXE_FERTILIZER.to_string(),
                    ],
                },
                FertilizerFamily {
                    tiers: [
                        BASIC_RETAINING_SOIL.to_string(),
                        QUALITY_RETAINING_SOIL.to_string(),
                        DELUXE_RETAINING_SOIL.to_string(),
                    ],
                },
            ],
            plots: vec![],
            plots_sequence: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct PlotId(pub usize);

/// One hoed soil tile. Fertilizers are kept in application order, the
/// delimited save string exists only at the loading boundary.
#[derive(Debug, Clone)]
pub struct Plot {
    pub id: PlotId,
    pub fertilizers: Vec<String>,
}

/// Host observation of the crop growing on a plot, passed by value into
/// operations which need it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct CropState {
    pub current_phase: i32,
    pub day_of_current_phase: i32,
    pub regrow_days: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Fertilizing {
    PlotChanged { plot: PlotId, fertilizers: String },
    RegrowthChanged { plot: PlotId, day: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum FertilizingError {
    // the tile was never hoed, it cannot hold fertilizer
    PlotNotFound { plot: PlotId },
    CropAlreadySprouted { plot: PlotId },
    HasThisFertilizer { plot: PlotId },
    HasAnotherFertilizer { plot: PlotId },
}

impl FertilizingDomain {
    pub fn qualify(item: &str) -> String {
        if item.starts_with(ITEM_QUALIFIER) {
            item.to_string()
        } else {
            format!("{}{}", ITEM_QUALIFIER, item)
        }
    }

    pub fn find_family(&self, item: &str) -> Option<&FertilizerFamily> {
        self.families
            .iter()
            .find(|family| family.tiers.iter().any(|tier| tier == item))
    }

    pub fn family_of(&self, item: &str) -> Option<(usize, usize)> {
        for (index, family) in self.families.iter().enumerate() {
            if let Some(tier) = family.tiers.iter().position(|tier| tier == item) {
                return Some((index, tier));
            }
        }
        None
    }

    /// Catalog extension point for external plugins, startup only.
    pub fn register_family(&mut self, tiers: [String; 3]) {
        let tiers = tiers.map(|tier| Self::qualify(&tier));
        info!("Registers fertilizer family {:?}", tiers);
        self.families.push(FertilizerFamily { tiers });
    }
}
