// src/engine/rooms.rs
//
// A compact reference engine: carves rooms into a cell grid, connects
// them, sprinkles features, and reports every step through the sink
// contract. It aims for plausible floors and a faithful event stream,
// not for parity with any particular game's generator.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;
use union_find::{QuickUnionUf, UnionBySize, UnionFind};

use crate::config::{
    AdvancedSettings, DungeonObjective, DungeonProperties, FloorLayout, FloorProperties,
    GenerationConstants, HiddenStairsType,
};
use crate::engine::{
    Coords, DungeonEngine, DungeonGenerationInfo, DungeonGrid, FloorGenerationStatus,
    GenerationStep, MajorStep, MinorStep, StepLevel, StepSink, StepState, TerrainType,
    FLOOR_HEIGHT, FLOOR_WIDTH, NO_ROOM,
};

/// Room-and-hallway engine backed by the thread-local RNG.
pub struct RoomsEngine {
    rng: ThreadRng,
}

impl RoomsEngine {
    pub fn new() -> Self {
        RoomsEngine { rng: rand::rng() }
    }
}

impl Default for RoomsEngine {
    fn default() -> Self {
        RoomsEngine::new()
    }
}

/// Cell-grid dimensions for a layout. Unused layout slots fall back to
/// the large grid.
fn cell_grid(layout: FloorLayout) -> (usize, usize) {
    match layout {
        FloorLayout::Small => (4, 2),
        FloorLayout::Medium => (4, 3),
        FloorLayout::Line => (5, 1),
        FloorLayout::Cross => (3, 3),
        FloorLayout::Beetle => (3, 3),
        FloorLayout::Crossroads => (5, 4),
        FloorLayout::OuterRing => (5, 3),
        FloorLayout::OuterRooms => (5, 3),
        FloorLayout::OneRoomMonsterHouse => (1, 1),
        FloorLayout::TwoRoomsWithMonsterHouse => (2, 1),
        FloorLayout::Large0x8 => (5, 4),
        _ => (6, 4),
    }
}

/// One cell of the layout grid and the room rectangle carved into it, if
/// any.
#[derive(Clone, Copy)]
struct Cell {
    col: usize,
    row: usize,
    /// Carved room rectangle (x0, y0, w, h), when the cell holds a room.
    room: Option<(usize, usize, usize, usize)>,
    /// Single open tile, when the cell holds a hallway anchor.
    anchor: Option<Coords>,
    connections: u32,
}

/// All mutable state of one run, reported wholesale on every step.
struct Run {
    grid: DungeonGrid,
    info: DungeonGenerationInfo,
    status: FloorGenerationStatus,
    boundary_cols: Vec<usize>,
    boundary_rows: Vec<usize>,
    granularity: StepLevel,
}

impl Run {
    fn emit(&self, sink: &mut dyn StepSink, step: GenerationStep) {
        if self.granularity == StepLevel::Major && step.level() == StepLevel::Minor {
            return;
        }
        sink.observe(
            step,
            StepState {
                grid: &self.grid,
                info: &self.info,
                status: &self.status,
                boundary_cols: &self.boundary_cols,
                boundary_rows: &self.boundary_rows,
            },
        );
    }

    fn major(&self, sink: &mut dyn StepSink, step: MajorStep) {
        self.emit(sink, GenerationStep::Major(step));
    }

    fn minor(&self, sink: &mut dyn StepSink, step: MinorStep) {
        self.emit(sink, GenerationStep::Minor(step));
    }

    fn open_tile(&mut self, x: usize, y: usize, room_index: u8) {
        let tile = self.grid.tile_mut(x, y);
        tile.terrain_flags.terrain_type = TerrainType::Normal;
        tile.room_index = room_index;
    }

    /// Every open tile belonging to some room.
    fn room_tiles(&self) -> Vec<Coords> {
        let mut tiles = Vec::new();
        for x in 0..FLOOR_WIDTH {
            for y in 0..FLOOR_HEIGHT {
                let tile = self.grid.tile(x, y);
                if tile.terrain_flags.terrain_type == TerrainType::Normal
                    && tile.room_index != NO_ROOM
                {
                    tiles.push(Coords::new(x, y));
                }
            }
        }
        tiles
    }

    /// Carve an L-shaped hallway between two open points.
    fn carve_hallway(&mut self, from: Coords, to: Coords) {
        let mut x = from.x;
        let mut y = from.y;
        while x != to.x {
            if self.grid.tile(x, y).terrain_flags.terrain_type == TerrainType::Wall {
                self.open_tile(x, y, NO_ROOM);
            }
            x = if to.x > x { x + 1 } else { x - 1 };
        }
        while y != to.y {
            if self.grid.tile(x, y).terrain_flags.terrain_type == TerrainType::Wall {
                self.open_tile(x, y, NO_ROOM);
            }
            y = if to.y > y { y + 1 } else { y - 1 };
        }
        if self.grid.tile(x, y).terrain_flags.terrain_type == TerrainType::Wall {
            self.open_tile(x, y, NO_ROOM);
        }
    }

    fn open_neighbors(&self, pos: Coords) -> u32 {
        let mut count = 0;
        for (dx, dy) in [(1isize, 0isize), (-1, 0), (0, 1), (0, -1)] {
            let nx = pos.x as isize + dx;
            let ny = pos.y as isize + dy;
            if DungeonGrid::in_bounds(nx, ny)
                && self
                    .grid
                    .tile(nx as usize, ny as usize)
                    .terrain_flags
                    .terrain_type
                    != TerrainType::Wall
            {
                count += 1;
            }
        }
        count
    }
}

fn percent_roll(rng: &mut ThreadRng, chance: i32) -> bool {
    chance > 0 && rng.random_range(0..100) < chance.min(100)
}

impl DungeonEngine for RoomsEngine {
    fn generate(
        &mut self,
        floor_props: &FloorProperties,
        dungeon_props: &DungeonProperties,
        constants: &GenerationConstants,
        advanced: &AdvancedSettings,
        sink: &mut dyn StepSink,
        granularity: StepLevel,
    ) {
        let rng = &mut self.rng;
        let (cols, rows) = cell_grid(floor_props.layout);
        let cell_w = FLOOR_WIDTH / cols;
        let cell_h = FLOOR_HEIGHT / rows;

        let mut run = Run {
            grid: DungeonGrid::new(),
            info: DungeonGenerationInfo::default(),
            status: FloorGenerationStatus {
                attempts: 1,
                ..FloorGenerationStatus::default()
            },
            boundary_cols: (1..cols).map(|c| c * cell_w).collect(),
            boundary_rows: (1..rows).map(|r| r * cell_h).collect(),
            granularity,
        };
        run.major(sink, MajorStep::ResetFloor);
        run.major(sink, MajorStep::InitDungeonGrid);

        // Decide how many cells become rooms. Negative density is exact;
        // positive gets a small random bonus. Always at least two rooms
        // when the grid has room for them.
        let cell_count = cols * rows;
        let requested = if floor_props.room_density < 0 {
            (-floor_props.room_density) as usize
        } else {
            floor_props.room_density as usize + rng.random_range(0..=2)
        };
        let room_count = requested.clamp(2.min(cell_count), cell_count);

        let mut cell_order: Vec<usize> = (0..cell_count).collect();
        cell_order.shuffle(rng);

        let mut cells: Vec<Cell> = (0..cell_count)
            .map(|i| Cell {
                col: i % cols,
                row: i / cols,
                room: None,
                anchor: None,
                connections: 0,
            })
            .collect();

        for (next_room, &cell_idx) in cell_order.iter().enumerate() {
            let cell = cells[cell_idx];
            let base_x = cell.col * cell_w;
            let base_y = cell.row * cell_h;

            if next_room < room_count {
                // Carve a room somewhere inside the cell, leaving a wall
                // ring so neighboring rooms never touch.
                let max_w = cell_w.saturating_sub(2).max(3).min(cell_w - 1);
                let max_h = cell_h.saturating_sub(2).max(3).min(cell_h - 1);
                let w = rng.random_range(3..=max_w.max(3));
                let h = rng.random_range(3..=max_h.max(3));
                let x0 = base_x + 1 + rng.random_range(0..=(cell_w - 1).saturating_sub(w));
                let y0 = base_y + 1 + rng.random_range(0..=(cell_h - 1).saturating_sub(h));

                for x in x0..x0 + w {
                    for y in y0..y0 + h {
                        run.open_tile(x, y, next_room as u8);
                    }
                }
                cells[cell_idx].room = Some((x0, y0, w, h));
                run.status.num_rooms += 1;
                run.minor(sink, MinorStep::CreateRoom);
            } else {
                let pos = Coords::new(base_x + cell_w / 2, base_y + cell_h / 2);
                run.open_tile(pos.x, pos.y, NO_ROOM);
                cells[cell_idx].anchor = Some(pos);
                run.minor(sink, MinorStep::CreateAnchor);
            }
        }
        run.major(sink, MajorStep::CreateRoomsAndAnchors);

        // Connect neighboring cells. A spanning pass keeps the floor
        // traversable; floor_connectivity adds random extra links on top.
        let center = |cell: &Cell| -> Coords {
            match (cell.room, cell.anchor) {
                (Some((x0, y0, w, h)), _) => Coords::new(x0 + w / 2, y0 + h / 2),
                (None, Some(pos)) => pos,
                (None, None) => Coords::new(
                    cell.col * cell_w + cell_w / 2,
                    cell.row * cell_h + cell_h / 2,
                ),
            }
        };

        let mut adjacent: Vec<(usize, usize)> = Vec::new();
        for i in 0..cell_count {
            if cells[i].col + 1 < cols {
                adjacent.push((i, i + 1));
            }
            if cells[i].row + 1 < rows {
                adjacent.push((i, i + cols));
            }
        }
        adjacent.shuffle(rng);

        // The legacy outer-rooms generator loses its connection pass on
        // narrow grids; the fix toggle restores it.
        let skip_connections = floor_props.layout == FloorLayout::OuterRooms
            && cols <= 2
            && !advanced.fix_generate_outer_rooms_floor_error;

        let mut linked: QuickUnionUf<UnionBySize> = QuickUnionUf::new(cell_count);
        if !skip_connections {
            let mut attempts = floor_props.floor_connectivity.max(0) as usize;
            for &(a, b) in &adjacent {
                let fresh = linked.find(a) != linked.find(b);
                if !fresh && attempts == 0 {
                    continue;
                }
                if !fresh {
                    attempts -= 1;
                }
                linked.union(a, b);
                cells[a].connections += 1;
                cells[b].connections += 1;
                let (from, to) = (center(&cells[a]), center(&cells[b]));
                run.carve_hallway(from, to);
                run.minor(sink, MinorStep::CreateHallway);
            }
        }
        run.major(sink, MajorStep::CreateGridCellConnections);

        // Sweep up any cell the random pass left stranded.
        for i in 1..cell_count {
            if linked.find(i) != linked.find(0) {
                linked.union(i, 0);
                let (from, to) = (center(&cells[i]), center(&cells[i - 1]));
                run.carve_hallway(from, to);
                cells[i].connections += 1;
                run.minor(sink, MinorStep::EnsureConnectedHallway);
            }
        }
        run.major(sink, MajorStep::EnsureConnectedGrid);

        // Merge the occasional pair of neighboring rooms into one.
        for i in 0..cell_count {
            if cells[i].room.is_none() || cells[i].col + 1 >= cols {
                continue;
            }
            let neighbor = i + 1;
            if cells[neighbor].room.is_some()
                && percent_roll(rng, constants.merge_rooms_chance)
            {
                let (ax, ay, _aw, ah) = cells[i].room.unwrap();
                let (bx, by, bw, bh) = cells[neighbor].room.unwrap();
                let y0 = ay.min(by);
                let y1 = (ay + ah).max(by + bh);
                let owner = run.grid.tile(ax, ay).room_index;
                for x in ax..bx + bw {
                    for y in y0..y1 {
                        run.open_tile(x, y, owner);
                    }
                }
                let merged = (ax, y0, bx + bw - ax, y1 - y0);
                cells[i].room = Some(merged);
                cells[neighbor].room = Some(merged);
                run.minor(sink, MinorStep::MergeRoom);
            }
        }

        // Dead-end cleanup. The legacy validation samples the wrong cell
        // and so misjudges some anchors; the fix toggle checks the
        // anchor's actual neighbors.
        if !floor_props.allow_dead_ends {
            for i in 0..cell_count {
                let Some(pos) = cells[i].anchor else { continue };
                let dead = if advanced.fix_dead_end_validation_error {
                    run.open_neighbors(pos) <= 1
                } else {
                    cells[i].connections <= 1
                };
                if dead {
                    let tile = run.grid.tile_mut(pos.x, pos.y);
                    tile.terrain_flags.terrain_type = TerrainType::Wall;
                    cells[i].anchor = None;
                    run.minor(sink, MinorStep::RemoveUnconnectedAnchor);
                }
            }
        }

        // Maze rooms stay disabled unless the override toggle is on.
        if advanced.allow_wall_maze_room_generation
            && percent_roll(rng, floor_props.maze_room_chance)
        {
            if let Some((x0, y0, w, h)) = cells.iter().filter_map(|c| c.room).next() {
                let mut x = x0 + 1;
                while x + 1 < x0 + w {
                    for y in y0..y0 + h - 1 {
                        run.grid.tile_mut(x, y).terrain_flags.terrain_type = TerrainType::Wall;
                    }
                    x += 2;
                }
                run.major(sink, MajorStep::GenerateMazeRoom);
            }
        }

        // Shop and monster house are mutually exclusive; neither spawns
        // on a rescue floor.
        let rescue = dungeon_props.dungeon_objective == DungeonObjective::Rescue;
        let rooms: Vec<(usize, usize, usize, usize)> =
            cells.iter().filter_map(|c| c.room).collect();

        if !rescue && !rooms.is_empty() && percent_roll(rng, floor_props.kecleon_shop_chance) {
            let (x0, y0, w, h) = rooms[rng.random_range(0..rooms.len())];
            for x in x0..x0 + w {
                for y in y0..y0 + h {
                    run.grid.tile_mut(x, y).terrain_flags.in_kecleon_shop = true;
                }
            }
            run.status.has_kecleon_shop = true;
            run.major(sink, MajorStep::GenerateKecleonShop);
        }

        let mut house_room = None;
        if !rescue
            && !run.status.has_kecleon_shop
            && !rooms.is_empty()
            && percent_roll(rng, floor_props.monster_house_chance)
        {
            let room = rooms[rng.random_range(0..rooms.len())];
            let (x0, y0, w, h) = room;
            for x in x0..x0 + w {
                for y in y0..y0 + h {
                    run.grid.tile_mut(x, y).terrain_flags.in_monster_house = true;
                }
            }
            run.status.has_monster_house = true;
            house_room = Some(room);
            run.major(sink, MajorStep::GenerateMonsterHouse);
        }

        // Extra hallways: short random momentum walks out of rooms.
        for _ in 0..floor_props.num_extra_hallways.max(0) {
            let tiles = run.room_tiles();
            if tiles.is_empty() {
                break;
            }
            let start = tiles[rng.random_range(0..tiles.len())];
            let (dx, dy) = [(1isize, 0isize), (-1, 0), (0, 1), (0, -1)]
                [rng.random_range(0..4)];
            let mut x = start.x as isize;
            let mut y = start.y as isize;
            let mut carved = false;
            for _ in 0..rng.random_range(3..12) {
                x += dx;
                y += dy;
                if !DungeonGrid::in_bounds(x, y) {
                    break;
                }
                let (ux, uy) = (x as usize, y as usize);
                if run.grid.tile(ux, uy).terrain_flags.terrain_type != TerrainType::Wall {
                    break;
                }
                run.open_tile(ux, uy, NO_ROOM);
                carved = true;
            }
            if carved {
                run.minor(sink, MinorStep::GenerateExtraHallway);
            }
        }
        run.major(sink, MajorStep::GenerateExtraHallways);

        // Chip corners off rooms flagged for imperfections.
        if floor_props.room_flags.room_imperfections {
            for &(x0, y0, w, h) in &rooms {
                if percent_roll(rng, constants.no_imperfections_chance) {
                    continue;
                }
                for &(cx, cy) in &[
                    (x0, y0),
                    (x0 + w - 1, y0),
                    (x0, y0 + h - 1),
                    (x0 + w - 1, y0 + h - 1),
                ] {
                    if rng.random_bool(0.5) {
                        run.grid.tile_mut(cx, cy).terrain_flags.terrain_type =
                            TerrainType::Wall;
                    }
                }
                run.minor(sink, MinorStep::GenerateRoomImperfection);
            }
            run.major(sink, MajorStep::GenerateRoomImperfections);
        }

        // Secondary terrain: one river walk plus standalone lakes, eating
        // into wall tiles only.
        if floor_props.room_flags.secondary_terrain_generation {
            let mut x = rng.random_range(0..FLOOR_WIDTH) as isize;
            for y in 0..FLOOR_HEIGHT {
                let ux = x.clamp(0, FLOOR_WIDTH as isize - 1) as usize;
                let tile = run.grid.tile_mut(ux, y);
                if tile.terrain_flags.terrain_type == TerrainType::Wall {
                    tile.terrain_flags.terrain_type = TerrainType::Secondary;
                }
                x += rng.random_range(-1..=1) as isize;
            }
            run.minor(sink, MinorStep::SecondaryTerrainRiver);

            for _ in 0..floor_props.secondary_terrain_density.max(0) {
                let cx = rng.random_range(1..FLOOR_WIDTH - 1);
                let cy = rng.random_range(1..FLOOR_HEIGHT - 1);
                for dx in -1isize..=1 {
                    for dy in -1isize..=1 {
                        let (ux, uy) = ((cx as isize + dx) as usize, (cy as isize + dy) as usize);
                        let tile = run.grid.tile_mut(ux, uy);
                        if tile.terrain_flags.terrain_type == TerrainType::Wall {
                            tile.terrain_flags.terrain_type = TerrainType::Secondary;
                        }
                    }
                }
                run.minor(sink, MinorStep::SecondaryTerrainStandaloneLake);
            }
            run.major(sink, MajorStep::GenerateSecondaryTerrain);
        }

        // Non-enemy spawns: stairs first, then items, traps, player.
        let tiles = run.room_tiles();
        let pick = |rng: &mut ThreadRng| tiles[rng.random_range(0..tiles.len())];

        if !tiles.is_empty() {
            let pos = pick(rng);
            run.grid.tile_mut(pos.x, pos.y).spawn_flags.stairs = true;
            run.info.stairs_spawn = Some(pos);
            run.minor(sink, MinorStep::SpawnStairs);

            if floor_props.hidden_stairs_type != HiddenStairsType::None {
                let pos = pick(rng);
                run.grid.tile_mut(pos.x, pos.y).spawn_flags.stairs = true;
                run.info.hidden_stairs_spawn = Some(pos);
            }

            let item_count = floor_props.item_density.max(1) as usize;
            for _ in 0..item_count {
                let pos = pick(rng);
                run.grid.tile_mut(pos.x, pos.y).spawn_flags.item = true;
            }
            run.minor(sink, MinorStep::SpawnItems);

            if floor_props.buried_item_density > 0 {
                for _ in 0..floor_props.buried_item_density as usize {
                    let x = rng.random_range(0..FLOOR_WIDTH);
                    let y = rng.random_range(0..FLOOR_HEIGHT);
                    let tile = run.grid.tile_mut(x, y);
                    if tile.terrain_flags.terrain_type == TerrainType::Wall {
                        tile.spawn_flags.item = true;
                    }
                }
                run.minor(sink, MinorStep::SpawnBuriedItems);
            }

            if let Some((x0, y0, w, h)) = house_room {
                let spawns = constants.max_number_monster_house_item_spawns.max(0) as usize;
                for _ in 0..spawns {
                    let pos =
                        Coords::new(x0 + rng.random_range(0..w), y0 + rng.random_range(0..h));
                    let tile = run.grid.tile_mut(pos.x, pos.y);
                    if rng.random_bool(0.5) {
                        tile.spawn_flags.item = true;
                    } else {
                        tile.spawn_flags.trap = true;
                    }
                }
                run.minor(sink, MinorStep::SpawnMonsterHouseItemsTraps);
            }

            for _ in 0..floor_props.trap_density.max(0) as usize {
                let pos = pick(rng);
                run.grid.tile_mut(pos.x, pos.y).spawn_flags.trap = true;
            }
            run.minor(sink, MinorStep::SpawnTraps);

            let pos = pick(rng);
            run.info.player_spawn = Some(pos);
            run.minor(sink, MinorStep::SpawnPlayer);
        }
        run.major(sink, MajorStep::SpawnNonEnemies);

        // Enemies last, with the monster house topped up separately.
        if !tiles.is_empty() {
            let enemy_count = if floor_props.enemy_density < 0 {
                (-floor_props.enemy_density) as usize
            } else {
                let d = floor_props.enemy_density.max(1) as usize;
                rng.random_range(d.div_ceil(2)..=d)
            };
            for _ in 0..enemy_count.max(1) {
                let pos = pick(rng);
                run.grid.tile_mut(pos.x, pos.y).spawn_flags.monster = true;
            }
            run.minor(sink, MinorStep::SpawnNonMonsterHouseEnemies);

            if let Some((x0, y0, w, h)) = house_room {
                let extra = constants.max_number_monster_house_enemy_spawns.max(0) as usize;
                for _ in 0..extra.min(w * h) {
                    let pos =
                        Coords::new(x0 + rng.random_range(0..w), y0 + rng.random_range(0..h));
                    run.grid.tile_mut(pos.x, pos.y).spawn_flags.monster = true;
                }
                run.minor(sink, MinorStep::SpawnMonsterHouseExtraEnemies);
            }
        }
        run.major(sink, MajorStep::SpawnEnemies);

        run.major(sink, MajorStep::GenerateFloor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DungeonConfig;

    struct CollectingSink {
        steps: Vec<GenerationStep>,
        final_player: Option<Coords>,
        final_stairs: Option<Coords>,
    }

    impl StepSink for CollectingSink {
        fn observe(&mut self, step: GenerationStep, state: StepState<'_>) {
            self.steps.push(step);
            self.final_player = state.info.player_spawn;
            self.final_stairs = state.info.stairs_spawn;
        }
    }

    fn run(granularity: StepLevel) -> CollectingSink {
        let config = DungeonConfig::default();
        let mut sink = CollectingSink {
            steps: Vec::new(),
            final_player: None,
            final_stairs: None,
        };
        RoomsEngine::new().generate(
            &config.floor_props,
            &config.dungeon_props,
            &config.generation_constants,
            &config.advanced_settings,
            &mut sink,
            granularity,
        );
        sink
    }

    #[test]
    fn run_always_ends_with_the_floor_complete_milestone() {
        let sink = run(StepLevel::Minor);
        assert!(!sink.steps.is_empty());
        assert_eq!(
            sink.steps.last(),
            Some(&GenerationStep::Major(MajorStep::GenerateFloor))
        );
    }

    #[test]
    fn major_granularity_reports_only_milestones() {
        let sink = run(StepLevel::Major);
        assert!(!sink.steps.is_empty());
        assert!(sink.steps.iter().all(|s| s.level() == StepLevel::Major));
    }

    #[test]
    fn defaults_place_player_and_stairs() {
        let sink = run(StepLevel::Minor);
        assert!(sink.final_player.is_some());
        assert!(sink.final_stairs.is_some());
    }

    #[test]
    fn every_layout_completes() {
        for &layout in FloorLayout::all() {
            let mut config = DungeonConfig::default();
            config.floor_props.layout = layout;
            let mut sink = CollectingSink {
                steps: Vec::new(),
                final_player: None,
                final_stairs: None,
            };
            RoomsEngine::new().generate(
                &config.floor_props,
                &config.dungeon_props,
                &config.generation_constants,
                &config.advanced_settings,
                &mut sink,
                StepLevel::Major,
            );
            assert_eq!(
                sink.steps.last(),
                Some(&GenerationStep::Major(MajorStep::GenerateFloor)),
                "layout {:?}",
                layout
            );
        }
    }
}
