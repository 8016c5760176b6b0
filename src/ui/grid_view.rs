// src/ui/grid_view.rs

use eframe::egui::{self, Rect, Sense, Vec2};

use crate::classify::{ColorCategory, Snapshot, TileDisplay};
use crate::engine::{FLOOR_HEIGHT, FLOOR_WIDTH};
use crate::ui::theme::DungeonTheme;

/// Paint one snapshot as a tile grid.
///
/// Cell-boundary walls are tinted with the grid-border color when the
/// toggle is on; entity markers are drawn as filled circles on top of
/// their tile.
pub fn show_grid(
    ui: &mut egui::Ui,
    snapshot: &Snapshot,
    theme: &DungeonTheme,
    show_cell_boundary: bool,
    show_entities: bool,
) {
    let side = (ui.available_width() / FLOOR_WIDTH as f32).clamp(4.0, 18.0);
    let desired = Vec2::new(side * FLOOR_WIDTH as f32, side * FLOOR_HEIGHT as f32);
    let (response, painter) = ui.allocate_painter(desired, Sense::hover());
    let origin = response.rect.min;

    painter.rect_filled(response.rect, 0.0, theme.background);

    for x in 0..FLOOR_WIDTH {
        for y in 0..FLOOR_HEIGHT {
            let display = snapshot.tile(x, y);
            let fill = if show_cell_boundary && display.is_cell_boundary {
                theme.color(ColorCategory::GridCellBorder)
            } else {
                theme.color(display.color)
            };

            let min = origin + Vec2::new(x as f32 * side, y as f32 * side);
            let rect = Rect::from_min_size(min, Vec2::splat(side - 1.0));
            painter.rect_filled(rect, 0.0, fill);

            if show_entities {
                if let Some(entity) = display.entity {
                    painter.circle_filled(rect.center(), side * 0.3, theme.color(entity));
                }
            }
        }
    }
}

/// The legend entries, in display order.
const LEGEND: [(&str, ColorCategory); 11] = [
    ("Wall", ColorCategory::Wall),
    ("Grid Cell Border", ColorCategory::GridCellBorder),
    ("Room", ColorCategory::Room),
    ("Hallway", ColorCategory::Hallway),
    ("Secondary Terrain", ColorCategory::SecondaryTerrain),
    ("Player Spawn", ColorCategory::Player),
    ("Stairs", ColorCategory::Stairs),
    ("Hidden Stairs", ColorCategory::HiddenStairs),
    ("Trap", ColorCategory::Trap),
    ("Kecleon Shop", ColorCategory::KecleonShop),
    ("Monster House", ColorCategory::MonsterHouse),
];

pub fn show_legend(ui: &mut egui::Ui, theme: &DungeonTheme) {
    ui.horizontal_wrapped(|ui| {
        for (label, category) in LEGEND {
            legend_swatch(ui, theme.color(category), false, label);
        }
        // Item and enemy markers draw as circles, like on the grid.
        legend_swatch(ui, theme.color(ColorCategory::Item), true, "Item");
        legend_swatch(ui, theme.color(ColorCategory::Enemy), true, "Enemy");
    });
}

fn legend_swatch(ui: &mut egui::Ui, color: egui::Color32, circle: bool, label: &str) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
    if circle {
        ui.painter().circle_filled(rect.center(), 5.0, color);
    } else {
        ui.painter().rect_filled(rect, 0.0, color);
    }
    ui.label(label);
    ui.add_space(8.0);
}

/// True when the tile would currently be painted with the border tint.
/// Split out so the paint rule is testable without a UI context.
pub fn paints_as_border(display: &TileDisplay, show_cell_boundary: bool) -> bool {
    show_cell_boundary && display.is_cell_boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_tint_requires_both_flag_and_toggle() {
        let display = TileDisplay {
            color: ColorCategory::Wall,
            is_cell_boundary: true,
            entity: None,
        };
        assert!(paints_as_border(&display, true));
        assert!(!paints_as_border(&display, false));

        let plain = TileDisplay {
            is_cell_boundary: false,
            ..display
        };
        assert!(!paints_as_border(&plain, true));
    }
}
