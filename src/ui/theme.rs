// src/ui/theme.rs

use eframe::egui::Color32;

use crate::classify::ColorCategory;

/// The named colors the grid view draws with, one per semantic category.
/// The classifier never sees these; it emits categories and this is the
/// only place they become pixels.
pub struct DungeonTheme {
    pub background: Color32,
    pub wall: Color32,
    pub room: Color32,
    pub hallway: Color32,
    pub secondary_terrain: Color32,
    pub kecleon_shop: Color32,
    pub monster_house: Color32,
    pub trap: Color32,
    pub stairs: Color32,
    pub hidden_stairs: Color32,
    pub player: Color32,
    pub item: Color32,
    pub enemy: Color32,
    pub grid_cell_border: Color32,
}

impl Default for DungeonTheme {
    fn default() -> Self {
        DungeonTheme {
            background: Color32::from_rgb(24, 26, 31),
            wall: Color32::from_rgb(52, 56, 64),
            room: Color32::from_rgb(222, 205, 160),
            hallway: Color32::from_rgb(158, 142, 106),
            secondary_terrain: Color32::from_rgb(52, 152, 219),
            kecleon_shop: Color32::from_rgb(155, 89, 182),
            monster_house: Color32::from_rgb(192, 57, 43),
            trap: Color32::from_rgb(241, 196, 15),
            stairs: Color32::from_rgb(236, 240, 241),
            hidden_stairs: Color32::from_rgb(127, 140, 141),
            player: Color32::from_rgb(46, 204, 113),
            item: Color32::from_rgb(230, 126, 34),
            enemy: Color32::from_rgb(231, 76, 60),
            grid_cell_border: Color32::from_rgb(96, 104, 118),
        }
    }
}

impl DungeonTheme {
    /// Resolve a classifier category to its configured color.
    pub fn color(&self, category: ColorCategory) -> Color32 {
        match category {
            ColorCategory::Wall => self.wall,
            ColorCategory::Room => self.room,
            ColorCategory::Hallway => self.hallway,
            ColorCategory::SecondaryTerrain => self.secondary_terrain,
            ColorCategory::KecleonShop => self.kecleon_shop,
            ColorCategory::MonsterHouse => self.monster_house,
            ColorCategory::Trap => self.trap,
            ColorCategory::Stairs => self.stairs,
            ColorCategory::HiddenStairs => self.hidden_stairs,
            ColorCategory::Player => self.player,
            ColorCategory::Item => self.item,
            ColorCategory::Enemy => self.enemy,
            ColorCategory::GridCellBorder => self.grid_cell_border,
        }
    }
}
