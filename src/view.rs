use serde::{Deserialize, Serialize};

use crate::api::ActionError;
use crate::fertilizing::PlotId;
use crate::FertilizerMod;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

pub const FERTILIZER_BASE_LAYER: f32 = 1.9e-8;
pub const FERTILIZER_LAYER_STEP: f32 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub struct FertilizerSprite {
    pub rect: Rect,
    pub depth: f32,
}

/// Icon sub-region on the cursors sheet, 16x16 cells in a 3-row column
/// block. Total over any id, unknown ids fall back to the first cell.
pub fn fertilizer_icon_rect(id: &str) -> Rect {
    let index = match id {
        "(O)369" | "369" => 1,
        "(O)919" | "919" => 2,
        "(O)370" | "370" => 3,
        "(O)371" | "371" => 4,
        "(O)920" | "920" => 5,
        "(O)465" | "465" => 6,
        "(O)466" | "466" => 7,
        "(O)918" | "918" => 8,
        _ => 0,
    };
    Rect {
        x: 173 + index / 3 * 16,
        y: 462 + index % 3 * 16,
        width: 16,
        height: 16,
    }
}

impl FertilizerMod {
    /// One sprite per applied fertilizer, in application order. Depth
    /// grows strictly so overlapping icons stay individually visible.
    pub fn look_at_plot(&self, plot: PlotId) -> Result<Vec<FertilizerSprite>, ActionError> {
        let plot = self.fertilizing.get_plot(plot)?;
        let mut sprites = vec![];
        let mut depth = FERTILIZER_BASE_LAYER;
        for id in &plot.fertilizers {
            sprites.push(FertilizerSprite {
                rect: fertilizer_icon_rect(id),
                depth,
            });
            depth += FERTILIZER_LAYER_STEP;
        }
        Ok(sprites)
    }
}
