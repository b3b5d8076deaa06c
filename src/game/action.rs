use super::state::Vec2;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Order in which enemies try their moves; earlier entries win ties.
    pub const ENEMY_ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the unit vector for moving in this direction
    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0, -1),
            Direction::Down => Vec2::new(0, 1),
            Direction::Left => Vec2::new(-1, 0),
            Direction::Right => Vec2::new(1, 0),
        }
    }
}

/// Input delivered to the engine for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Buffer a direction for the next move
    Move(Direction),
    /// Leave the start screen
    Start,
    /// Begin a fresh session after a win or loss
    Restart,
    /// No input this tick
    Continue,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Right.is_opposite(Direction::Right));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), Vec2::new(0, -1));
        assert_eq!(Direction::Down.delta(), Vec2::new(0, 1));
        assert_eq!(Direction::Left.delta(), Vec2::new(-1, 0));
        assert_eq!(Direction::Right.delta(), Vec2::new(1, 0));
    }

    #[test]
    fn test_enemy_order() {
        assert_eq!(
            Direction::ENEMY_ORDER,
            [
                Direction::Right,
                Direction::Left,
                Direction::Down,
                Direction::Up
            ]
        );
    }

    #[test]
    fn test_action_from_direction() {
        assert_eq!(Action::from(Direction::Left), Action::Move(Direction::Left));
    }
}
