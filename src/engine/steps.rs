// src/engine/steps.rs

/// Granularity of the step stream an engine run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepLevel {
    /// Coarse milestones only.
    Major,
    /// Every fine-grained step, plus the milestones.
    Minor,
}

/// A coarse generation milestone. Most mark the completion of a whole
/// phase; the layout-specific ones mark special floor shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorStep {
    ResetFloor,
    InitDungeonGrid,
    CreateRoomsAndAnchors,
    CreateGridCellConnections,
    EnsureConnectedGrid,
    GenerateMazeRoom,
    GenerateKecleonShop,
    GenerateMonsterHouse,
    GenerateExtraHallways,
    GenerateRoomImperfections,
    GenerateSecondaryStructures,
    OneRoomMonsterHouseFloor,
    OuterRingFloor,
    CrossroadsFloor,
    TwoRoomsWithMonsterHouseFloor,
    MergeRoomVertically,
    GenerateSecondaryTerrain,
    SpawnNonEnemies,
    SpawnEnemies,
    /// The terminal step: the floor is complete. Always the last step of
    /// a run.
    GenerateFloor,
}

/// A fine-grained generation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinorStep {
    CreateRoom,
    CreateAnchor,
    CreateHallway,
    MergeRoom,
    EnsureConnectedHallway,
    RemoveUnconnectedAnchor,
    RemoveUnconnectedRoom,
    GenerateExtraHallway,
    GenerateRoomImperfection,
    GenerateSecondaryStructure,
    MergeRoomVertically,
    SecondaryTerrainRiver,
    SecondaryTerrainRiverLake,
    SecondaryTerrainStandaloneLake,
    SpawnStairs,
    SpawnItems,
    SpawnBuriedItems,
    SpawnMonsterHouseItemsTraps,
    SpawnTraps,
    SpawnPlayer,
    SpawnNonMonsterHouseEnemies,
    SpawnMonsterHouseExtraEnemies,
}

/// One reported generation step, tagged by granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStep {
    Major(MajorStep),
    Minor(MinorStep),
}

impl GenerationStep {
    pub fn level(&self) -> StepLevel {
        match self {
            GenerationStep::Major(_) => StepLevel::Major,
            GenerationStep::Minor(_) => StepLevel::Minor,
        }
    }

    /// Human-readable description shown by the step selector.
    pub fn describe(&self) -> &'static str {
        match self {
            GenerationStep::Minor(step) => match step {
                MinorStep::CreateRoom => "Create Room",
                MinorStep::CreateAnchor => "Create Hallway Anchor",
                MinorStep::CreateHallway => "Create Hallway",
                MinorStep::MergeRoom => "Merge Rooms Together",
                MinorStep::EnsureConnectedHallway => "Add Hallway to Connect Room",
                MinorStep::RemoveUnconnectedAnchor => "Remove Unconnected Hallway Anchor",
                MinorStep::RemoveUnconnectedRoom => "Remove Unconnected Room",
                MinorStep::GenerateExtraHallway => "Generate Extra Hallway",
                MinorStep::GenerateRoomImperfection => "Generate Imperfections on Room",
                MinorStep::GenerateSecondaryStructure => "Generate Secondary Structure",
                MinorStep::MergeRoomVertically => "Merge Room Vertically",
                MinorStep::SecondaryTerrainRiver => "Generate Secondary Terrain River",
                MinorStep::SecondaryTerrainRiverLake => "Generate Secondary Terrain Lake on River",
                MinorStep::SecondaryTerrainStandaloneLake => {
                    "Generate Secondary Terrain Standalone Lake"
                }
                MinorStep::SpawnStairs => "Spawn the Stairs",
                MinorStep::SpawnItems => "Spawn Items",
                MinorStep::SpawnBuriedItems => "Spawn Buried Items",
                MinorStep::SpawnMonsterHouseItemsTraps => {
                    "Spawn Items / Traps in the Monster House"
                }
                MinorStep::SpawnTraps => "Spawn Traps",
                MinorStep::SpawnPlayer => "Place the Player Spawn",
                MinorStep::SpawnNonMonsterHouseEnemies => "Spawn Standard Enemies",
                MinorStep::SpawnMonsterHouseExtraEnemies => "Spawn Extra Monster House Enemies",
            },
            GenerationStep::Major(step) => match step {
                MajorStep::ResetFloor => "Reset Floor",
                MajorStep::InitDungeonGrid => "Initialize Dungeon Grid",
                MajorStep::CreateRoomsAndAnchors => "Finish Creating Rooms and Hallway Anchors",
                MajorStep::CreateGridCellConnections => "Finish Creating Grid Cell Connections",
                MajorStep::EnsureConnectedGrid => "Finish Ensuring Grid is Connected",
                MajorStep::GenerateMazeRoom => "Generate Maze Room",
                MajorStep::GenerateKecleonShop => "Generate Kecleon Shop",
                MajorStep::GenerateMonsterHouse => "Generate Monster House",
                MajorStep::GenerateExtraHallways => "Finish Generating Extra Hallways",
                MajorStep::GenerateRoomImperfections => "Finish Generating Room Imperfections",
                MajorStep::GenerateSecondaryStructures => {
                    "Finish Generating Secondary Structures"
                }
                MajorStep::OneRoomMonsterHouseFloor => {
                    "Finish Setting Up One Room Monster House Floor"
                }
                MajorStep::OuterRingFloor => "Finish Setting Up Outer Ring Floor",
                MajorStep::CrossroadsFloor => "Finish Setting Up Crossroads Floor",
                MajorStep::TwoRoomsWithMonsterHouseFloor => {
                    "Finish Setting Up Two Rooms with Monster House Floor"
                }
                MajorStep::MergeRoomVertically => {
                    "Finish Merging Center Column Rooms Vertically"
                }
                MajorStep::GenerateSecondaryTerrain => "Finish Generating Secondary Terrain",
                MajorStep::SpawnNonEnemies => "Finish Spawning Non-Enemy Entities",
                MajorStep::SpawnEnemies => "Finish Spawning Enemies",
                MajorStep::GenerateFloor => "Generation Complete!",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_follows_variant() {
        assert_eq!(
            GenerationStep::Major(MajorStep::ResetFloor).level(),
            StepLevel::Major
        );
        assert_eq!(
            GenerationStep::Minor(MinorStep::CreateRoom).level(),
            StepLevel::Minor
        );
    }

    #[test]
    fn terminal_step_has_completion_text() {
        let done = GenerationStep::Major(MajorStep::GenerateFloor);
        assert_eq!(done.describe(), "Generation Complete!");
    }
}
