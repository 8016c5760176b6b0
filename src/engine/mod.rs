// src/engine/mod.rs
//
// The contract between the generation engine and everything that watches
// it. The engine is a collaborator behind a trait: it runs once per call,
// synchronously, and reports each generation step to a sink, in
// chronological order, never re-entrantly. What the engine does between
// reports is its own business.

mod rooms;
mod state;
mod steps;

pub use rooms::RoomsEngine;
pub use state::{
    Coords, DungeonGenerationInfo, DungeonGrid, FloorGenerationStatus, SpawnFlags, StepState,
    TerrainFlags, TerrainType, Tile, FLOOR_HEIGHT, FLOOR_WIDTH, NO_ROOM,
};
pub use steps::{GenerationStep, MajorStep, MinorStep, StepLevel};

use crate::config::{AdvancedSettings, DungeonProperties, FloorProperties, GenerationConstants};

/// Receiver for generation step reports.
///
/// `observe` is called once per step, in order, with the full in-progress
/// state. The references in `StepState` are only valid for the duration
/// of the call; an observer that wants to keep anything must copy it out.
pub trait StepSink {
    fn observe(&mut self, step: GenerationStep, state: StepState<'_>);
}

/// A dungeon-layout generation engine.
pub trait DungeonEngine {
    /// Run one complete floor generation, reporting steps to `sink`.
    ///
    /// With `StepLevel::Major` granularity only milestone steps are
    /// reported; with `StepLevel::Minor` every step is. Either way the
    /// run ends with the terminal floor-complete milestone, so a sink
    /// always sees at least one report.
    fn generate(
        &mut self,
        floor_props: &FloorProperties,
        dungeon_props: &DungeonProperties,
        constants: &GenerationConstants,
        advanced: &AdvancedSettings,
        sink: &mut dyn StepSink,
        granularity: StepLevel,
    );
}
