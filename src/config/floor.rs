// src/config/floor.rs

use serde::{Deserialize, Serialize};

/// The floor layout the generator starts from.
///
/// Small, Medium, and Large are the standard generators; `Large0x8` is
/// Large without the widest cell grid. The rest are special-cased floor
/// shapes. The unused slots fall back to a Large layout in the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloorLayout {
    Large,
    Small,
    OneRoomMonsterHouse,
    OuterRing,
    Crossroads,
    TwoRoomsWithMonsterHouse,
    Line,
    Cross,
    Large0x8,
    Beetle,
    OuterRooms,
    Medium,
    Unused0xC,
    Unused0xD,
    Unused0xE,
    Unused0xF,
}

impl FloorLayout {
    /// All layouts, in menu order.
    pub fn all() -> &'static [FloorLayout] {
        &[
            FloorLayout::Large,
            FloorLayout::Small,
            FloorLayout::OneRoomMonsterHouse,
            FloorLayout::OuterRing,
            FloorLayout::Crossroads,
            FloorLayout::TwoRoomsWithMonsterHouse,
            FloorLayout::Line,
            FloorLayout::Cross,
            FloorLayout::Large0x8,
            FloorLayout::Beetle,
            FloorLayout::OuterRooms,
            FloorLayout::Medium,
            FloorLayout::Unused0xC,
            FloorLayout::Unused0xD,
            FloorLayout::Unused0xE,
            FloorLayout::Unused0xF,
        ]
    }

    /// A user-friendly name for the layout.
    pub fn name(&self) -> &'static str {
        match self {
            FloorLayout::Large => "Large",
            FloorLayout::Small => "Small",
            FloorLayout::OneRoomMonsterHouse => "One Room Monster House",
            FloorLayout::OuterRing => "Outer Ring",
            FloorLayout::Crossroads => "Crossroads",
            FloorLayout::TwoRoomsWithMonsterHouse => "Two Rooms with Monster House",
            FloorLayout::Line => "Line",
            FloorLayout::Cross => "Cross",
            FloorLayout::Large0x8 => "Large 0x8",
            FloorLayout::Beetle => "Beetle",
            FloorLayout::OuterRooms => "Outer Rooms",
            FloorLayout::Medium => "Medium",
            FloorLayout::Unused0xC => "Unused (0xC)",
            FloorLayout::Unused0xD => "Unused (0xD)",
            FloorLayout::Unused0xE => "Unused (0xE)",
            FloorLayout::Unused0xF => "Unused (0xF)",
        }
    }
}

/// Which kind of hidden stairs may spawn on the floor, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiddenStairsType {
    None,
    SecretBazaar,
    SecretRoom,
    Random,
}

impl HiddenStairsType {
    pub fn all() -> &'static [HiddenStairsType] {
        &[
            HiddenStairsType::None,
            HiddenStairsType::SecretBazaar,
            HiddenStairsType::SecretRoom,
            HiddenStairsType::Random,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            HiddenStairsType::None => "None",
            HiddenStairsType::SecretBazaar => "Secret Bazaar",
            HiddenStairsType::SecretRoom => "Secret Room",
            HiddenStairsType::Random => "Random",
        }
    }
}

/// Per-room generation toggles, merged one level below the floor section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomFlags {
    /// Allow rooms with non-rectangular shapes (corners chipped away).
    pub room_imperfections: bool,
    /// Allow water/lava river and lake formations to generate.
    pub secondary_terrain_generation: bool,
}

/// Properties of the floor being generated: densities, chances, and the
/// layout selector. These are the knobs users touch most.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorProperties {
    pub layout: FloorLayout,
    /// Number of rooms to generate. Positive values get a random bonus of
    /// up to 2; negative values are exact.
    pub room_density: i32,
    pub item_density: i32,
    pub buried_item_density: i32,
    pub enemy_density: i32,
    pub trap_density: i32,
    /// Number of primary connecting hallways attempted between rooms.
    pub floor_connectivity: i32,
    pub num_extra_hallways: i32,
    /// Percent chance (0-100) that a Kecleon shop spawns.
    pub kecleon_shop_chance: i32,
    /// Percent chance (0-100) that a monster house spawns.
    pub monster_house_chance: i32,
    pub itemless_monster_house_chance: i32,
    pub maze_room_chance: i32,
    /// Allow primary hallways that end in dead ends.
    pub allow_dead_ends: bool,
    pub room_flags: RoomFlags,
    /// Number of standalone secondary-terrain lakes.
    pub secondary_terrain_density: i32,
    pub secondary_structures_budget: i32,
    pub floor_number: i32,
    pub fixed_room_id: i32,
    pub hidden_stairs_type: HiddenStairsType,
    pub hidden_stairs_spawn_chance: i32,
}

impl Default for FloorProperties {
    fn default() -> Self {
        FloorProperties {
            layout: FloorLayout::Large,
            room_density: 6,
            item_density: 5,
            buried_item_density: 10,
            enemy_density: 10,
            trap_density: 5,
            floor_connectivity: 15,
            num_extra_hallways: 10,
            kecleon_shop_chance: 20,
            monster_house_chance: 20,
            itemless_monster_house_chance: 0,
            maze_room_chance: 0,
            allow_dead_ends: false,
            room_flags: RoomFlags {
                room_imperfections: false,
                secondary_terrain_generation: true,
            },
            secondary_terrain_density: 5,
            secondary_structures_budget: 0,
            floor_number: 0,
            fixed_room_id: 0,
            hidden_stairs_type: HiddenStairsType::None,
            hidden_stairs_spawn_chance: 0,
        }
    }
}
