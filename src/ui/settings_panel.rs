// src/ui/settings_panel.rs
//
// Form controls for editing the draft configuration. Everything here
// mutates the draft only; nothing reaches the session store until the
// commit button dispatches it.

use eframe::egui;

use crate::config::{
    ChallengeSubtype, DungeonConfig, DungeonObjective, DungeonProperties, ExploreSubtype,
    FloorLayout, FloorProperties, GenerationConstants, HiddenStairsType, MissionType,
    OutlawSubtype, TakeItemSubtype,
};

/// Draw all four settings sections.
pub fn show(ui: &mut egui::Ui, draft: &mut DungeonConfig) {
    floor_properties(ui, &mut draft.floor_props);
    dungeon_properties(ui, &mut draft.dungeon_props);
    generation_constants(ui, &mut draft.generation_constants);
    advanced_settings(ui, &mut draft.advanced_settings);
}

fn int_row(ui: &mut egui::Ui, label: &str, value: &mut i32) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value));
    });
}

fn check_row(ui: &mut egui::Ui, label: &str, value: &mut bool) {
    ui.checkbox(value, label);
}

fn combo_row<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    label: &str,
    value: &mut T,
    options: &[T],
    name: fn(&T) -> &'static str,
) {
    ui.horizontal(|ui| {
        ui.label(label);
        egui::ComboBox::from_id_source(id)
            .selected_text(name(value))
            .show_ui(ui, |ui| {
                for option in options {
                    ui.selectable_value(value, *option, name(option));
                }
            });
    });
}

fn floor_properties(ui: &mut egui::Ui, floor: &mut FloorProperties) {
    ui.heading("Floor Properties");

    combo_row(
        ui,
        "layout",
        "Layout",
        &mut floor.layout,
        FloorLayout::all(),
        FloorLayout::name,
    );
    int_row(ui, "Room Density", &mut floor.room_density);
    ui.small("Negative values place an exact number of rooms.");
    int_row(ui, "Item Density", &mut floor.item_density);
    int_row(ui, "Buried Item Density", &mut floor.buried_item_density);
    int_row(ui, "Enemy Density", &mut floor.enemy_density);
    int_row(ui, "Trap Density", &mut floor.trap_density);
    int_row(ui, "Floor Connectivity", &mut floor.floor_connectivity);
    int_row(ui, "Number of Extra Hallways", &mut floor.num_extra_hallways);
    int_row(ui, "Kecleon Shop Chance", &mut floor.kecleon_shop_chance);
    int_row(ui, "Monster House Chance", &mut floor.monster_house_chance);
    int_row(
        ui,
        "Itemless Monster House Chance",
        &mut floor.itemless_monster_house_chance,
    );
    int_row(ui, "Maze Room Chance", &mut floor.maze_room_chance);
    check_row(ui, "Allow Dead Ends", &mut floor.allow_dead_ends);
    check_row(
        ui,
        "Allow Room Imperfections",
        &mut floor.room_flags.room_imperfections,
    );
    check_row(
        ui,
        "Allow Secondary Terrain Generation",
        &mut floor.room_flags.secondary_terrain_generation,
    );
    if floor.room_flags.secondary_terrain_generation {
        int_row(
            ui,
            "Secondary Terrain Density",
            &mut floor.secondary_terrain_density,
        );
    }
    int_row(
        ui,
        "Secondary Structures Budget",
        &mut floor.secondary_structures_budget,
    );
    combo_row(
        ui,
        "hidden_stairs_type",
        "Hidden Stairs Type",
        &mut floor.hidden_stairs_type,
        HiddenStairsType::all(),
        HiddenStairsType::name,
    );
}

fn dungeon_properties(ui: &mut egui::Ui, dungeon: &mut DungeonProperties) {
    ui.separator();
    ui.heading("Dungeon Properties");

    int_row(ui, "Dungeon ID", &mut dungeon.id);
    int_row(ui, "Floor Number", &mut dungeon.floor);
    int_row(ui, "# Floors in Dungeon + 1", &mut dungeon.n_floors_plus_one);
    check_row(ui, "Non-Story Mode", &mut dungeon.nonstory_flag);

    check_row(
        ui,
        "Mission Destination Floor",
        &mut dungeon.mission_destination.is_destination_floor,
    );
    if dungeon.mission_destination.is_destination_floor {
        mission_rows(ui, &mut dungeon.mission_destination.mission);
    }

    combo_row(
        ui,
        "dungeon_objective",
        "Dungeon Objective",
        &mut dungeon.dungeon_objective,
        DungeonObjective::all(),
        DungeonObjective::name,
    );
    if dungeon.dungeon_objective == DungeonObjective::Rescue {
        int_row(ui, "Rescue Floor", &mut dungeon.rescue_floor);
    }
    int_row(ui, "Guaranteed Item ID", &mut dungeon.guaranteed_item_id);
}

/// Mission kind selector, plus a subtype selector for the kinds that
/// carry one. Switching kinds resets the subtype to that kind's default.
fn mission_rows(ui: &mut egui::Ui, mission: &mut MissionType) {
    ui.horizontal(|ui| {
        ui.label("Mission Type");
        egui::ComboBox::from_id_source("mission_type")
            .selected_text(mission.name())
            .show_ui(ui, |ui| {
                for candidate in MissionType::all() {
                    let selected = candidate.same_kind(mission);
                    if ui.selectable_label(selected, candidate.name()).clicked() && !selected {
                        *mission = *candidate;
                    }
                }
            });
    });

    match mission {
        MissionType::ChallengeRequest(subtype) => combo_row(
            ui,
            "mission_subtype",
            "Mission Subtype",
            subtype,
            ChallengeSubtype::all(),
            ChallengeSubtype::name,
        ),
        MissionType::ExploreWithClient(subtype) => combo_row(
            ui,
            "mission_subtype",
            "Mission Subtype",
            subtype,
            ExploreSubtype::all(),
            ExploreSubtype::name,
        ),
        MissionType::ArrestOutlaw(subtype) => combo_row(
            ui,
            "mission_subtype",
            "Mission Subtype",
            subtype,
            OutlawSubtype::all(),
            OutlawSubtype::name,
        ),
        MissionType::TakeItemFromOutlaw(subtype) => combo_row(
            ui,
            "mission_subtype",
            "Mission Subtype",
            subtype,
            TakeItemSubtype::all(),
            TakeItemSubtype::name,
        ),
        _ => {}
    }
}

fn generation_constants(ui: &mut egui::Ui, constants: &mut GenerationConstants) {
    ui.separator();
    ui.heading("Generation Constants");

    int_row(ui, "Merge Rooms Chance", &mut constants.merge_rooms_chance);
    int_row(
        ui,
        "No Room Imperfections Chance",
        &mut constants.no_imperfections_chance,
    );
    int_row(
        ui,
        "Secondary Structures Flag Chance",
        &mut constants.secondary_structure_flag_chance,
    );
    int_row(
        ui,
        "Maximum Monster House Item / Trap Spawns",
        &mut constants.max_number_monster_house_item_spawns,
    );
    int_row(
        ui,
        "Maximum Monster House Extra Enemy Spawns",
        &mut constants.max_number_monster_house_enemy_spawns,
    );
    int_row(
        ui,
        "First Dungeon ID With Monster House Traps",
        &mut constants.first_dungeon_id_allow_monster_house_traps,
    );
}

fn advanced_settings(ui: &mut egui::Ui, advanced: &mut crate::config::AdvancedSettings) {
    ui.separator();
    ui.heading("Advanced Settings");

    check_row(
        ui,
        "Allow Wall Maze Room Generation",
        &mut advanced.allow_wall_maze_room_generation,
    );
    check_row(
        ui,
        "Fix Dead-End Validation Error",
        &mut advanced.fix_dead_end_validation_error,
    );
    check_row(
        ui,
        "Fix Generate Outer Rooms Floor Error",
        &mut advanced.fix_generate_outer_rooms_floor_error,
    );
}
