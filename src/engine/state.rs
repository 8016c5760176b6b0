// src/engine/state.rs

/// Width of the floor in tiles.
pub const FLOOR_WIDTH: usize = 56;
/// Height of the floor in tiles.
pub const FLOOR_HEIGHT: usize = 32;

/// Room index marking a tile that belongs to no room.
pub const NO_ROOM: u8 = 0xFF;

/// What a tile is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerrainType {
    /// Open, walkable ground (room interior or hallway).
    Normal,
    /// Water or lava.
    Secondary,
    #[default]
    Wall,
}

/// Terrain-level flags for one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerrainFlags {
    pub terrain_type: TerrainType,
    pub in_kecleon_shop: bool,
    pub in_monster_house: bool,
}

/// Spawn flags for one tile. A tile can carry several at once; display
/// priority is the classifier's concern, not the engine's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpawnFlags {
    pub trap: bool,
    pub stairs: bool,
    pub item: bool,
    pub monster: bool,
}

/// One tile of the in-progress floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub terrain_flags: TerrainFlags,
    pub spawn_flags: SpawnFlags,
    /// Index of the room the tile belongs to, or [`NO_ROOM`].
    pub room_index: u8,
}

impl Default for Tile {
    fn default() -> Self {
        Tile {
            terrain_flags: TerrainFlags::default(),
            spawn_flags: SpawnFlags::default(),
            room_index: NO_ROOM,
        }
    }
}

/// A tile coordinate. `x` runs along the floor width, `y` down the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coords {
    pub x: usize,
    pub y: usize,
}

impl Coords {
    pub fn new(x: usize, y: usize) -> Self {
        Coords { x, y }
    }
}

/// The fixed 56x32 tile grid of the in-progress floor, stored x-major to
/// match the traversal order snapshots are taken in.
#[derive(Debug, Clone)]
pub struct DungeonGrid {
    tiles: Vec<Tile>,
}

impl DungeonGrid {
    /// A grid of solid wall.
    pub fn new() -> Self {
        DungeonGrid {
            tiles: vec![Tile::default(); FLOOR_WIDTH * FLOOR_HEIGHT],
        }
    }

    pub fn tile(&self, x: usize, y: usize) -> &Tile {
        &self.tiles[x * FLOOR_HEIGHT + y]
    }

    pub fn tile_mut(&mut self, x: usize, y: usize) -> &mut Tile {
        &mut self.tiles[x * FLOOR_HEIGHT + y]
    }

    pub fn in_bounds(x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < FLOOR_WIDTH && (y as usize) < FLOOR_HEIGHT
    }
}

impl Default for DungeonGrid {
    fn default() -> Self {
        DungeonGrid::new()
    }
}

/// Auxiliary per-run metadata reported alongside the grid: the spawn
/// coordinates the display layer singles out.
#[derive(Debug, Clone, Copy, Default)]
pub struct DungeonGenerationInfo {
    pub player_spawn: Option<Coords>,
    pub stairs_spawn: Option<Coords>,
    pub hidden_stairs_spawn: Option<Coords>,
}

/// Bookkeeping about the run so far. Reported for observability; nothing
/// in the display pipeline depends on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloorGenerationStatus {
    pub attempts: u32,
    pub num_rooms: u32,
    pub has_kecleon_shop: bool,
    pub has_monster_house: bool,
}

/// Everything an engine hands over on one step report: the full
/// in-progress state, by reference, valid for the duration of the call.
#[derive(Clone, Copy)]
pub struct StepState<'a> {
    pub grid: &'a DungeonGrid,
    pub info: &'a DungeonGenerationInfo,
    pub status: &'a FloorGenerationStatus,
    /// Sorted x coordinates where a grid cell starts, excluding the first.
    pub boundary_cols: &'a [usize],
    /// Sorted y coordinates where a grid cell starts, excluding the first.
    pub boundary_rows: &'a [usize],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_grid_is_solid_wall() {
        let grid = DungeonGrid::new();
        assert_eq!(grid.tile(0, 0).terrain_flags.terrain_type, TerrainType::Wall);
        assert_eq!(
            grid.tile(FLOOR_WIDTH - 1, FLOOR_HEIGHT - 1).room_index,
            NO_ROOM
        );
    }

    #[test]
    fn tile_mut_addresses_the_same_cell() {
        let mut grid = DungeonGrid::new();
        grid.tile_mut(3, 7).terrain_flags.terrain_type = TerrainType::Normal;
        grid.tile_mut(3, 7).room_index = 2;

        assert_eq!(grid.tile(3, 7).terrain_flags.terrain_type, TerrainType::Normal);
        assert_eq!(grid.tile(3, 7).room_index, 2);
        assert_eq!(grid.tile(7, 3).room_index, NO_ROOM);
    }
}
