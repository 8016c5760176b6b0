// src/session/patch.rs

use crate::config::{
    DungeonConfig, DungeonObjective, DungeonProperties, FloorLayout, FloorProperties,
    GenerationConstants, HiddenStairsType, MissionType,
};

/// A partial configuration: every leaf is optional. Applying a patch
/// overwrites exactly the fields that are present and leaves the rest of
/// the target alone. Merging is one level deep per section; the two
/// nested sub-records get their own patch types one level further down,
/// so a patch can flip a single room flag without clobbering its sibling.
#[derive(Debug, Clone, Default)]
pub struct ConfigPatch {
    pub floor_props: FloorPatch,
    pub dungeon_props: DungeonPatch,
    pub generation_constants: ConstantsPatch,
    pub advanced_settings: AdvancedPatch,
}

impl ConfigPatch {
    pub fn apply(&self, config: &mut DungeonConfig) {
        self.floor_props.apply(&mut config.floor_props);
        self.dungeon_props.apply(&mut config.dungeon_props);
        self.generation_constants
            .apply(&mut config.generation_constants);
        self.advanced_settings.apply(&mut config.advanced_settings);
    }
}

/// A full-overwrite patch carrying every field of `config`. This is what
/// a commit of the whole draft dispatches.
impl From<&DungeonConfig> for ConfigPatch {
    fn from(config: &DungeonConfig) -> Self {
        let f = &config.floor_props;
        let d = &config.dungeon_props;
        let g = &config.generation_constants;
        let a = &config.advanced_settings;

        ConfigPatch {
            floor_props: FloorPatch {
                layout: Some(f.layout),
                room_density: Some(f.room_density),
                item_density: Some(f.item_density),
                buried_item_density: Some(f.buried_item_density),
                enemy_density: Some(f.enemy_density),
                trap_density: Some(f.trap_density),
                floor_connectivity: Some(f.floor_connectivity),
                num_extra_hallways: Some(f.num_extra_hallways),
                kecleon_shop_chance: Some(f.kecleon_shop_chance),
                monster_house_chance: Some(f.monster_house_chance),
                itemless_monster_house_chance: Some(f.itemless_monster_house_chance),
                maze_room_chance: Some(f.maze_room_chance),
                allow_dead_ends: Some(f.allow_dead_ends),
                room_flags: RoomFlagsPatch {
                    room_imperfections: Some(f.room_flags.room_imperfections),
                    secondary_terrain_generation: Some(f.room_flags.secondary_terrain_generation),
                },
                secondary_terrain_density: Some(f.secondary_terrain_density),
                secondary_structures_budget: Some(f.secondary_structures_budget),
                floor_number: Some(f.floor_number),
                fixed_room_id: Some(f.fixed_room_id),
                hidden_stairs_type: Some(f.hidden_stairs_type),
                hidden_stairs_spawn_chance: Some(f.hidden_stairs_spawn_chance),
            },
            dungeon_props: DungeonPatch {
                id: Some(d.id),
                floor: Some(d.floor),
                n_floors_plus_one: Some(d.n_floors_plus_one),
                rescue_floor: Some(d.rescue_floor),
                nonstory_flag: Some(d.nonstory_flag),
                mission_destination: MissionPatch {
                    is_destination_floor: Some(d.mission_destination.is_destination_floor),
                    mission: Some(d.mission_destination.mission),
                },
                dungeon_objective: Some(d.dungeon_objective),
                guaranteed_item_id: Some(d.guaranteed_item_id),
            },
            generation_constants: ConstantsPatch {
                merge_rooms_chance: Some(g.merge_rooms_chance),
                no_imperfections_chance: Some(g.no_imperfections_chance),
                secondary_structure_flag_chance: Some(g.secondary_structure_flag_chance),
                max_number_monster_house_item_spawns: Some(g.max_number_monster_house_item_spawns),
                max_number_monster_house_enemy_spawns: Some(
                    g.max_number_monster_house_enemy_spawns,
                ),
                first_dungeon_id_allow_monster_house_traps: Some(
                    g.first_dungeon_id_allow_monster_house_traps,
                ),
            },
            advanced_settings: AdvancedPatch {
                allow_wall_maze_room_generation: Some(a.allow_wall_maze_room_generation),
                fix_dead_end_validation_error: Some(a.fix_dead_end_validation_error),
                fix_generate_outer_rooms_floor_error: Some(a.fix_generate_outer_rooms_floor_error),
            },
        }
    }
}

macro_rules! overwrite {
    ($target:expr, $field:expr) => {
        if let Some(value) = $field {
            $target = value;
        }
    };
}

#[derive(Debug, Clone, Default)]
pub struct FloorPatch {
    pub layout: Option<FloorLayout>,
    pub room_density: Option<i32>,
    pub item_density: Option<i32>,
    pub buried_item_density: Option<i32>,
    pub enemy_density: Option<i32>,
    pub trap_density: Option<i32>,
    pub floor_connectivity: Option<i32>,
    pub num_extra_hallways: Option<i32>,
    pub kecleon_shop_chance: Option<i32>,
    pub monster_house_chance: Option<i32>,
    pub itemless_monster_house_chance: Option<i32>,
    pub maze_room_chance: Option<i32>,
    pub allow_dead_ends: Option<bool>,
    pub room_flags: RoomFlagsPatch,
    pub secondary_terrain_density: Option<i32>,
    pub secondary_structures_budget: Option<i32>,
    pub floor_number: Option<i32>,
    pub fixed_room_id: Option<i32>,
    pub hidden_stairs_type: Option<HiddenStairsType>,
    pub hidden_stairs_spawn_chance: Option<i32>,
}

impl FloorPatch {
    fn apply(&self, target: &mut FloorProperties) {
        overwrite!(target.layout, self.layout);
        overwrite!(target.room_density, self.room_density);
        overwrite!(target.item_density, self.item_density);
        overwrite!(target.buried_item_density, self.buried_item_density);
        overwrite!(target.enemy_density, self.enemy_density);
        overwrite!(target.trap_density, self.trap_density);
        overwrite!(target.floor_connectivity, self.floor_connectivity);
        overwrite!(target.num_extra_hallways, self.num_extra_hallways);
        overwrite!(target.kecleon_shop_chance, self.kecleon_shop_chance);
        overwrite!(target.monster_house_chance, self.monster_house_chance);
        overwrite!(
            target.itemless_monster_house_chance,
            self.itemless_monster_house_chance
        );
        overwrite!(target.maze_room_chance, self.maze_room_chance);
        overwrite!(target.allow_dead_ends, self.allow_dead_ends);
        overwrite!(
            target.room_flags.room_imperfections,
            self.room_flags.room_imperfections
        );
        overwrite!(
            target.room_flags.secondary_terrain_generation,
            self.room_flags.secondary_terrain_generation
        );
        overwrite!(
            target.secondary_terrain_density,
            self.secondary_terrain_density
        );
        overwrite!(
            target.secondary_structures_budget,
            self.secondary_structures_budget
        );
        overwrite!(target.floor_number, self.floor_number);
        overwrite!(target.fixed_room_id, self.fixed_room_id);
        overwrite!(target.hidden_stairs_type, self.hidden_stairs_type);
        overwrite!(
            target.hidden_stairs_spawn_chance,
            self.hidden_stairs_spawn_chance
        );
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoomFlagsPatch {
    pub room_imperfections: Option<bool>,
    pub secondary_terrain_generation: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct MissionPatch {
    pub is_destination_floor: Option<bool>,
    pub mission: Option<MissionType>,
}

#[derive(Debug, Clone, Default)]
pub struct DungeonPatch {
    pub id: Option<i32>,
    pub floor: Option<i32>,
    pub n_floors_plus_one: Option<i32>,
    pub rescue_floor: Option<i32>,
    pub nonstory_flag: Option<bool>,
    pub mission_destination: MissionPatch,
    pub dungeon_objective: Option<DungeonObjective>,
    pub guaranteed_item_id: Option<i32>,
}

impl DungeonPatch {
    fn apply(&self, target: &mut DungeonProperties) {
        overwrite!(target.id, self.id);
        overwrite!(target.floor, self.floor);
        overwrite!(target.n_floors_plus_one, self.n_floors_plus_one);
        overwrite!(target.rescue_floor, self.rescue_floor);
        overwrite!(target.nonstory_flag, self.nonstory_flag);
        overwrite!(
            target.mission_destination.is_destination_floor,
            self.mission_destination.is_destination_floor
        );
        overwrite!(
            target.mission_destination.mission,
            self.mission_destination.mission
        );
        overwrite!(target.dungeon_objective, self.dungeon_objective);
        overwrite!(target.guaranteed_item_id, self.guaranteed_item_id);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConstantsPatch {
    pub merge_rooms_chance: Option<i32>,
    pub no_imperfections_chance: Option<i32>,
    pub secondary_structure_flag_chance: Option<i32>,
    pub max_number_monster_house_item_spawns: Option<i32>,
    pub max_number_monster_house_enemy_spawns: Option<i32>,
    pub first_dungeon_id_allow_monster_house_traps: Option<i32>,
}

impl ConstantsPatch {
    fn apply(&self, target: &mut GenerationConstants) {
        overwrite!(target.merge_rooms_chance, self.merge_rooms_chance);
        overwrite!(target.no_imperfections_chance, self.no_imperfections_chance);
        overwrite!(
            target.secondary_structure_flag_chance,
            self.secondary_structure_flag_chance
        );
        overwrite!(
            target.max_number_monster_house_item_spawns,
            self.max_number_monster_house_item_spawns
        );
        overwrite!(
            target.max_number_monster_house_enemy_spawns,
            self.max_number_monster_house_enemy_spawns
        );
        overwrite!(
            target.first_dungeon_id_allow_monster_house_traps,
            self.first_dungeon_id_allow_monster_house_traps
        );
    }
}

#[derive(Debug, Clone, Default)]
pub struct AdvancedPatch {
    pub allow_wall_maze_room_generation: Option<bool>,
    pub fix_dead_end_validation_error: Option<bool>,
    pub fix_generate_outer_rooms_floor_error: Option<bool>,
}

impl AdvancedPatch {
    fn apply(&self, target: &mut crate::config::AdvancedSettings) {
        overwrite!(
            target.allow_wall_maze_room_generation,
            self.allow_wall_maze_room_generation
        );
        overwrite!(
            target.fix_dead_end_validation_error,
            self.fix_dead_end_validation_error
        );
        overwrite!(
            target.fix_generate_outer_rooms_floor_error,
            self.fix_generate_outer_rooms_floor_error
        );
    }
}
