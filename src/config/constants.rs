// src/config/constants.rs

use serde::{Deserialize, Serialize};

/// Tuning constants the generator consults at fixed decision points.
/// These rarely need touching; the defaults match the vanilla behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConstants {
    /// Percent chance (0-100) that two mergeable rooms are merged.
    pub merge_rooms_chance: i32,
    /// Percent chance (0-100) that a room flagged for imperfections is
    /// left perfect anyway.
    pub no_imperfections_chance: i32,
    /// Percent chance (0-100) that a room is flagged as a secondary
    /// structure candidate.
    pub secondary_structure_flag_chance: i32,
    pub max_number_monster_house_item_spawns: i32,
    pub max_number_monster_house_enemy_spawns: i32,
    /// First story-mode dungeon ID whose monster houses may contain traps.
    pub first_dungeon_id_allow_monster_house_traps: i32,
}

impl Default for GenerationConstants {
    fn default() -> Self {
        GenerationConstants {
            merge_rooms_chance: 5,
            no_imperfections_chance: 60,
            secondary_structure_flag_chance: 80,
            max_number_monster_house_item_spawns: 7,
            max_number_monster_house_enemy_spawns: 30,
            first_dungeon_id_allow_monster_house_traps: 28,
        }
    }
}
