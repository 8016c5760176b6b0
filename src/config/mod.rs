// src/config/mod.rs

mod advanced;
mod constants;
mod dungeon;
mod floor;

pub use advanced::AdvancedSettings;
pub use constants::GenerationConstants;
pub use dungeon::{
    ChallengeSubtype, DungeonObjective, DungeonProperties, ExploreSubtype, MissionDestination,
    MissionType, OutlawSubtype, TakeItemSubtype,
};
pub use floor::{FloorLayout, FloorProperties, HiddenStairsType, RoomFlags};

use serde::{Deserialize, Serialize};

/// The full set of generation parameters, grouped into the four sections
/// the settings document is made of.
///
/// No section performs range validation: nonsensical values are accepted
/// and handed to the engine unchanged. Whether the engine can satisfy
/// them is the engine's problem.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DungeonConfig {
    pub floor_props: FloorProperties,
    pub dungeon_props: DungeonProperties,
    pub generation_constants: GenerationConstants,
    pub advanced_settings: AdvancedSettings,
}
