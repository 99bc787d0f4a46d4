use serde::{Deserialize, Serialize};

use crate::fertilizing::{Fertilizing, FertilizingError, PlotId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum Event {
    FertilizingStream(Vec<Fertilizing>),
    ApplySoundTriggered { plot: PlotId },
}

impl From<Vec<Fertilizing>> for Event {
    fn from(events: Vec<Fertilizing>) -> Self {
        Event::FertilizingStream(events)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, bincode::Encode, bincode::Decode)]
pub enum ActionError {
    Fertilizing(FertilizingError),
    Test,
}

impl From<FertilizingError> for ActionError {
    fn from(error: FertilizingError) -> Self {
        Self::Fertilizing(error)
    }
}
