use super::state::{Enemy, GameState, GameStatus, Vec2};

/// Everything a renderer needs for one frame, borrowed from the live state
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a> {
    /// Wall rows for the visible columns only
    pub walls: Vec<Vec<bool>>,
    /// First level column shown
    pub viewport_x: i32,
    /// Number of columns shown
    pub visible_width: i32,
    pub foods: &'a [Vec2],
    pub exit: Vec2,
    pub body: &'a [Vec2],
    pub enemies: &'a [Enemy],
    pub score: u32,
    pub status: GameStatus,
    pub power_up_ticks: u32,
    /// Whether the start prompt is in the "on" half of its blink cycle
    pub show_prompt: bool,
}

impl<'a> Snapshot<'a> {
    pub fn capture(state: &'a GameState, blink_period: u32) -> Self {
        let viewport = state.viewport;

        Self {
            walls: state
                .level
                .wall_window(viewport.offset, viewport.visible_width),
            viewport_x: viewport.offset,
            visible_width: viewport.visible_width,
            foods: &state.level.foods,
            exit: state.level.exit,
            body: &state.snake.body,
            enemies: &state.enemies,
            score: state.score,
            status: state.status,
            power_up_ticks: state.power_up_ticks,
            show_prompt: state.blink_counter < blink_period / 2,
        }
    }

    /// Convert a level cell to a screen column, if it is on screen
    pub fn screen_x(&self, pos: Vec2) -> Option<usize> {
        let x = pos.x - self.viewport_x;
        (0..self.visible_width).contains(&x).then_some(x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Level;

    #[test]
    fn test_capture_visible_window() {
        let level = Level::parse("#S#F#E#").unwrap();
        let mut state = GameState::new(level, 3);
        state.viewport.offset = 2;

        let snapshot = Snapshot::capture(&state, 60);
        assert_eq!(snapshot.walls, vec![vec![true, false, true]]);
        assert_eq!(snapshot.foods, &[Vec2::new(3, 0)]);
        assert_eq!(snapshot.exit, Vec2::new(5, 0));
        assert_eq!(snapshot.body, &[Vec2::new(1, 0)]);
        assert_eq!(snapshot.status, GameStatus::Start);
        assert_eq!(snapshot.screen_x(Vec2::new(3, 0)), Some(1));
        assert_eq!(snapshot.screen_x(Vec2::new(1, 0)), None);
        assert_eq!(snapshot.screen_x(Vec2::new(5, 0)), None);
    }

    #[test]
    fn test_prompt_blinks() {
        let level = Level::parse("SFE").unwrap();
        let mut state = GameState::new(level, 32);

        state.blink_counter = 29;
        assert!(Snapshot::capture(&state, 60).show_prompt);

        state.blink_counter = 30;
        assert!(!Snapshot::capture(&state, 60).show_prompt);
    }
}
