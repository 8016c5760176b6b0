// src/config/advanced.rs

use serde::{Deserialize, Serialize};

/// Opt-in engine behavior switches.
///
/// The two `fix_*` toggles select corrected code paths for known engine
/// bugs; left off, the engine reproduces the legacy behavior exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedSettings {
    /// Re-enable wall-maze room generation, which an impossible attempt
    /// counter check otherwise disables.
    pub allow_wall_maze_room_generation: bool,
    /// Check the correct neighboring grid cell in each direction when
    /// removing dead ends, instead of re-checking the same cell four times.
    pub fix_dead_end_validation_error: bool,
    /// Keep the Outer Rooms layout connected for narrow grids and set the
    /// last pair of top/bottom connections correctly.
    pub fix_generate_outer_rooms_floor_error: bool,
}
