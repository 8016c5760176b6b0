// src/recorder/mod.rs
//
// Harvests one engine run into an ordered timeline of classified
// snapshots. The recorder does no failure recovery of its own: if the
// engine panics mid-run, the panic unwinds to the caller and no timeline
// is produced.

use crate::classify::{self, Snapshot};
use crate::config::DungeonConfig;
use crate::engine::{DungeonEngine, GenerationStep, StepLevel, StepSink, StepState};

/// One recorded step: the event that happened and the floor as it looked
/// immediately after.
#[derive(Debug, Clone)]
pub struct TimelineEntry {
    pub step: GenerationStep,
    pub snapshot: Snapshot,
}

/// The ordered record of one generation run. Sealed on return from
/// [`record`]; there is no way to add or reorder entries afterwards.
///
/// A timeline from a completed run is never empty: the engine contract
/// guarantees the terminal floor-complete milestone is always reported.
#[derive(Debug, Clone)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
}

impl Timeline {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TimelineEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    /// Index of the final, most-complete state.
    pub fn last_index(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }
}

struct RecordingSink {
    entries: Vec<TimelineEntry>,
}

impl StepSink for RecordingSink {
    fn observe(&mut self, step: GenerationStep, state: StepState<'_>) {
        self.entries.push(TimelineEntry {
            step,
            snapshot: classify::snapshot(&state),
        });
    }
}

/// Run the engine exactly once against the committed configuration and
/// return the sealed timeline.
pub fn record(
    engine: &mut dyn DungeonEngine,
    config: &DungeonConfig,
    granularity: StepLevel,
) -> Timeline {
    let mut sink = RecordingSink {
        entries: Vec::new(),
    };

    engine.generate(
        &config.floor_props,
        &config.dungeon_props,
        &config.generation_constants,
        &config.advanced_settings,
        &mut sink,
        granularity,
    );

    Timeline {
        entries: sink.entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AdvancedSettings, DungeonProperties, FloorProperties, GenerationConstants,
    };
    use crate::engine::{
        DungeonGenerationInfo, DungeonGrid, FloorGenerationStatus, MajorStep, MinorStep,
    };

    /// Engine that replays a fixed step script over an unchanging grid.
    struct ScriptedEngine {
        script: Vec<GenerationStep>,
    }

    impl DungeonEngine for ScriptedEngine {
        fn generate(
            &mut self,
            _floor_props: &FloorProperties,
            _dungeon_props: &DungeonProperties,
            _constants: &GenerationConstants,
            _advanced: &AdvancedSettings,
            sink: &mut dyn StepSink,
            granularity: StepLevel,
        ) {
            let grid = DungeonGrid::new();
            let info = DungeonGenerationInfo::default();
            let status = FloorGenerationStatus::default();

            for &step in &self.script {
                if granularity == StepLevel::Major && step.level() == StepLevel::Minor {
                    continue;
                }
                sink.observe(
                    step,
                    StepState {
                        grid: &grid,
                        info: &info,
                        status: &status,
                        boundary_cols: &[],
                        boundary_rows: &[],
                    },
                );
            }
        }
    }

    fn script() -> Vec<GenerationStep> {
        vec![
            GenerationStep::Major(MajorStep::ResetFloor),
            GenerationStep::Minor(MinorStep::CreateRoom),
            GenerationStep::Minor(MinorStep::CreateHallway),
            GenerationStep::Major(MajorStep::GenerateFloor),
        ]
    }

    #[test]
    fn records_every_step_in_order() {
        let mut engine = ScriptedEngine { script: script() };
        let timeline = record(
            &mut engine,
            &DungeonConfig::default(),
            StepLevel::Minor,
        );

        assert_eq!(timeline.len(), 4);
        let steps: Vec<GenerationStep> =
            timeline.entries().iter().map(|e| e.step).collect();
        assert_eq!(steps, script());
    }

    #[test]
    fn major_granularity_drops_minor_steps() {
        let mut engine = ScriptedEngine { script: script() };
        let timeline = record(
            &mut engine,
            &DungeonConfig::default(),
            StepLevel::Major,
        );

        assert_eq!(timeline.len(), 2);
        assert!(timeline
            .entries()
            .iter()
            .all(|e| e.step.level() == StepLevel::Major));
    }

    #[test]
    fn timeline_from_a_run_is_never_empty() {
        let mut engine = ScriptedEngine {
            script: vec![GenerationStep::Major(MajorStep::GenerateFloor)],
        };
        let timeline = record(
            &mut engine,
            &DungeonConfig::default(),
            StepLevel::Major,
        );

        assert!(!timeline.is_empty());
        assert_eq!(timeline.last_index(), 0);
    }
}
