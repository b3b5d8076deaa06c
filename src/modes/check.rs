//! Level validation without starting the terminal UI

use crate::game::Level;

/// Human-readable description of a parsed level
pub fn level_summary(level: &Level) -> String {
    format!(
        "level ok: {}x{}, {} food, {} enemies, start {:?}, exit {:?}",
        level.width,
        level.height,
        level.foods.len(),
        level.enemy_spawns.len(),
        (level.entrance.x, level.entrance.y),
        (level.exit.x, level.exit.y),
    )
}
