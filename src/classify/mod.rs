// src/classify/mod.rs
//
// Turns raw engine tiles into display attributes. Everything here is
// pure: the same tile, spawn info, and boundary cursor state always
// produce the same TileDisplay. Colors are named categories only; the
// theme resolves them to actual colors at draw time.

use crate::engine::{
    Coords, DungeonGenerationInfo, StepState, TerrainType, Tile, FLOOR_HEIGHT, FLOOR_WIDTH,
    NO_ROOM,
};

/// A named color slot the theme knows how to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    Wall,
    Room,
    Hallway,
    SecondaryTerrain,
    KecleonShop,
    MonsterHouse,
    Trap,
    Stairs,
    HiddenStairs,
    Player,
    Item,
    Enemy,
    GridCellBorder,
}

/// Resolved display attributes for one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDisplay {
    pub color: ColorCategory,
    /// Wall tile sitting on a grid-cell border.
    pub is_cell_boundary: bool,
    /// Entity marker drawn on top of the tile, if any.
    pub entity: Option<ColorCategory>,
}

/// Monotone cursor over one axis' sorted list of grid-cell start
/// coordinates.
///
/// A coordinate `c` lies on a cell border when it equals the current
/// unconsumed start, or is exactly one before it (the wall column/row in
/// front of the cell). Once `c` reaches a start, the cursor moves on.
/// The cursor only ever advances; feeding it coordinates out of order
/// would mark borders against starts that were already consumed.
#[derive(Debug)]
pub struct BoundarySweep<'a> {
    starts: &'a [usize],
    idx: usize,
}

impl<'a> BoundarySweep<'a> {
    pub fn new(starts: &'a [usize]) -> Self {
        BoundarySweep { starts, idx: 0 }
    }

    /// Advance to coordinate `c`, returning whether `c` is on a border.
    pub fn advance(&mut self, c: usize) -> bool {
        match self.starts.get(self.idx) {
            Some(&start) if c + 1 >= start => {
                if c >= start {
                    self.idx += 1;
                }
                true
            }
            _ => false,
        }
    }
}

/// Classify one tile. `on_border` is the OR of the two per-axis sweep
/// results for the tile's coordinates.
///
/// Color rules apply lowest-priority first, each later rule overwriting
/// the slot: base terrain, shop, monster house, trap, stairs (hidden
/// stairs when the coordinate matches the hidden spawn), player on top of
/// everything. Entities resolve separately: item first, monster wins when
/// both are present.
pub fn classify_tile(
    tile: &Tile,
    pos: Coords,
    info: &DungeonGenerationInfo,
    on_border: bool,
) -> TileDisplay {
    let mut is_cell_boundary = false;

    let mut color = match tile.terrain_flags.terrain_type {
        TerrainType::Normal => {
            if tile.room_index != NO_ROOM {
                ColorCategory::Room
            } else {
                ColorCategory::Hallway
            }
        }
        TerrainType::Secondary => ColorCategory::SecondaryTerrain,
        TerrainType::Wall => {
            if on_border {
                is_cell_boundary = true;
            }
            ColorCategory::Wall
        }
    };

    if tile.terrain_flags.in_kecleon_shop {
        color = ColorCategory::KecleonShop;
    }
    if tile.terrain_flags.in_monster_house {
        color = ColorCategory::MonsterHouse;
    }
    if tile.spawn_flags.trap {
        color = ColorCategory::Trap;
    }
    if tile.spawn_flags.stairs {
        color = if info.hidden_stairs_spawn == Some(pos) {
            ColorCategory::HiddenStairs
        } else {
            ColorCategory::Stairs
        };
    }
    if info.player_spawn == Some(pos) {
        color = ColorCategory::Player;
    }

    let mut entity = None;
    if tile.spawn_flags.item {
        entity = Some(ColorCategory::Item);
    }
    if tile.spawn_flags.monster {
        entity = Some(ColorCategory::Enemy);
    }

    TileDisplay {
        color,
        is_cell_boundary,
        entity,
    }
}

/// One fully classified grid state, as reported at one generation step.
#[derive(Debug, Clone)]
pub struct Snapshot {
    tiles: Vec<TileDisplay>,
}

impl Snapshot {
    pub fn tile(&self, x: usize, y: usize) -> &TileDisplay {
        &self.tiles[x * FLOOR_HEIGHT + y]
    }
}

/// Classify an entire reported state into a snapshot.
///
/// Traversal is x-outer, y-inner. The column sweep advances once per
/// column; the row sweep restarts per column and advances down it. Both
/// move strictly forward within their traversal.
pub fn snapshot(state: &StepState<'_>) -> Snapshot {
    let mut tiles = Vec::with_capacity(FLOOR_WIDTH * FLOOR_HEIGHT);
    let mut col_sweep = BoundarySweep::new(state.boundary_cols);

    for x in 0..FLOOR_WIDTH {
        let on_col_border = col_sweep.advance(x);
        let mut row_sweep = BoundarySweep::new(state.boundary_rows);

        for y in 0..FLOOR_HEIGHT {
            let on_row_border = row_sweep.advance(y);
            tiles.push(classify_tile(
                state.grid.tile(x, y),
                Coords::new(x, y),
                state.info,
                on_col_border || on_row_border,
            ));
        }
    }

    Snapshot { tiles }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{
        DungeonGrid, FloorGenerationStatus, SpawnFlags, TerrainFlags, TerrainType, Tile,
    };

    fn open_tile() -> Tile {
        Tile {
            terrain_flags: TerrainFlags {
                terrain_type: TerrainType::Normal,
                ..TerrainFlags::default()
            },
            spawn_flags: SpawnFlags::default(),
            room_index: 0,
        }
    }

    #[test]
    fn room_and_hallway_split_on_room_index() {
        let info = DungeonGenerationInfo::default();
        let mut tile = open_tile();

        let shown = classify_tile(&tile, Coords::new(1, 1), &info, false);
        assert_eq!(shown.color, ColorCategory::Room);

        tile.room_index = NO_ROOM;
        let shown = classify_tile(&tile, Coords::new(1, 1), &info, false);
        assert_eq!(shown.color, ColorCategory::Hallway);
    }

    #[test]
    fn monster_house_beats_kecleon_shop() {
        let info = DungeonGenerationInfo::default();
        let mut tile = open_tile();
        tile.terrain_flags.in_kecleon_shop = true;
        tile.terrain_flags.in_monster_house = true;

        let shown = classify_tile(&tile, Coords::new(4, 4), &info, false);
        assert_eq!(shown.color, ColorCategory::MonsterHouse);
    }

    #[test]
    fn player_spawn_beats_stairs_and_trap() {
        let pos = Coords::new(10, 12);
        let info = DungeonGenerationInfo {
            player_spawn: Some(pos),
            ..DungeonGenerationInfo::default()
        };
        let mut tile = open_tile();
        tile.spawn_flags.trap = true;
        tile.spawn_flags.stairs = true;

        let shown = classify_tile(&tile, pos, &info, false);
        assert_eq!(shown.color, ColorCategory::Player);

        // One tile over, the stairs flag wins over the trap flag.
        let shown = classify_tile(&tile, Coords::new(11, 12), &info, false);
        assert_eq!(shown.color, ColorCategory::Stairs);
    }

    #[test]
    fn hidden_stairs_coordinate_overrides_stairs_color() {
        let pos = Coords::new(20, 5);
        let info = DungeonGenerationInfo {
            hidden_stairs_spawn: Some(pos),
            ..DungeonGenerationInfo::default()
        };
        let mut tile = open_tile();
        tile.spawn_flags.stairs = true;

        assert_eq!(
            classify_tile(&tile, pos, &info, false).color,
            ColorCategory::HiddenStairs
        );
        assert_eq!(
            classify_tile(&tile, Coords::new(21, 5), &info, false).color,
            ColorCategory::Stairs
        );
    }

    #[test]
    fn monster_entity_wins_over_item() {
        let info = DungeonGenerationInfo::default();
        let mut tile = open_tile();
        tile.spawn_flags.item = true;

        let shown = classify_tile(&tile, Coords::new(2, 2), &info, false);
        assert_eq!(shown.entity, Some(ColorCategory::Item));

        tile.spawn_flags.monster = true;
        let shown = classify_tile(&tile, Coords::new(2, 2), &info, false);
        assert_eq!(shown.entity, Some(ColorCategory::Enemy));
    }

    #[test]
    fn only_walls_get_the_boundary_flag() {
        let info = DungeonGenerationInfo::default();
        let wall = Tile::default();
        let open = open_tile();

        assert!(classify_tile(&wall, Coords::new(0, 0), &info, true).is_cell_boundary);
        assert!(!classify_tile(&open, Coords::new(0, 0), &info, true).is_cell_boundary);
        assert!(!classify_tile(&wall, Coords::new(0, 0), &info, false).is_cell_boundary);
    }

    #[test]
    fn boundary_sweep_marks_start_and_the_column_before_it() {
        let starts = [4, 12, 20];
        let mut sweep = BoundarySweep::new(&starts);

        let hits: Vec<bool> = (0..24).map(|c| sweep.advance(c)).collect();

        for (c, hit) in hits.iter().enumerate() {
            let expected = matches!(c, 3 | 4 | 11 | 12 | 19 | 20);
            assert_eq!(*hit, expected, "coordinate {}", c);
        }
    }

    #[test]
    fn boundary_sweep_never_reuses_a_consumed_start() {
        let starts = [4];
        let mut sweep = BoundarySweep::new(&starts);

        for c in 0..3 {
            assert!(!sweep.advance(c));
        }
        assert!(sweep.advance(3));
        assert!(sweep.advance(4));
        // Past the start, the cursor is exhausted; nothing matches again.
        for c in 5..10 {
            assert!(!sweep.advance(c));
        }
    }

    #[test]
    fn snapshot_covers_the_whole_floor() {
        let grid = DungeonGrid::new();
        let info = DungeonGenerationInfo::default();
        let status = FloorGenerationStatus::default();
        let state = StepState {
            grid: &grid,
            info: &info,
            status: &status,
            boundary_cols: &[8, 16],
            boundary_rows: &[8],
        };

        let snap = snapshot(&state);
        assert_eq!(snap.tile(0, 0).color, ColorCategory::Wall);
        // x=7 is one before the start at 8: a border wall.
        assert!(snap.tile(7, 0).is_cell_boundary);
        assert!(snap.tile(0, 7).is_cell_boundary);
        assert!(!snap.tile(5, 5).is_cell_boundary);
    }
}
