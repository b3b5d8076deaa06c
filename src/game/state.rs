use std::ops::Add;

use super::action::Direction;
use super::level::Level;
use super::viewport::Viewport;

/// A cell on the grid, or a unit step between cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance; orders the same as the true distance
    pub fn distance_squared(&self, other: Vec2) -> i64 {
        let dx = i64::from(self.x - other.x);
        let dy = i64::from(self.y - other.y);
        dx * dx + dy * dy
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

/// The player's snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Vec2>,
    /// Direction applied on the last move; `None` until the first input
    pub direction: Option<Direction>,
    /// Latest requested direction, applied on the next move
    pub buffered: Option<Direction>,
}

impl Snake {
    /// Create a one-segment snake waiting for its first direction
    pub fn new(head: Vec2) -> Self {
        Self {
            body: vec![head],
            direction: None,
            buffered: None,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Vec2 {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Vec2] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Vec2) -> bool {
        self.body_segments().contains(&pos)
    }

    /// Remember a requested direction for the next move
    pub fn buffer(&mut self, direction: Direction) {
        self.buffered = Some(direction);
    }

    /// Apply the buffered direction unless it reverses the current one
    pub fn commit_direction(&mut self) -> Option<Direction> {
        if let Some(next) = self.buffered {
            let reverses = self.direction.is_some_and(|d| d.is_opposite(next));
            if !reverses {
                self.direction = Some(next);
            }
        }
        self.direction
    }

    /// Prepend a new head, dropping the tail unless `grow` is set
    pub fn advance(&mut self, new_head: Vec2, grow: bool) {
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// A pursuer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub position: Vec2,
}

impl Enemy {
    pub fn new(position: Vec2) -> Self {
        Self { position }
    }
}

/// Top of the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Start,
    Playing,
    Lost,
    Won,
}

impl GameStatus {
    /// Lost or Won
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Lost | GameStatus::Won)
    }
}

/// Type of collision that ended a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// An enemy caught the snake outside a power-up
    Enemy,
}

/// Complete state of one session
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub level: Level,
    pub enemies: Vec<Enemy>,
    pub score: u32,
    /// Ticks left in the current power-up window
    pub power_up_ticks: u32,
    pub viewport: Viewport,
    pub status: GameStatus,
    /// Ticks since the last movement cycle
    pub frames_since_move: u32,
    /// Start-screen blink cycle position
    pub blink_counter: u32,
}

impl GameState {
    /// Fresh session on the start screen: snake at the entrance, enemies at
    /// their spawns
    pub fn new(level: Level, visible_width: i32) -> Self {
        let snake = Snake::new(level.entrance);
        let enemies = level.enemy_spawns.iter().copied().map(Enemy::new).collect();

        Self {
            snake,
            level,
            enemies,
            score: 0,
            power_up_ticks: 0,
            viewport: Viewport::new(visible_width),
            status: GameStatus::Start,
            frames_since_move: 0,
            blink_counter: 0,
        }
    }

    /// Whether enemies currently flee and can be eaten
    pub fn is_powered_up(&self) -> bool {
        self.power_up_ticks > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_add_and_distance() {
        let pos = Vec2::new(5, 5);
        assert_eq!(pos + Direction::Right.delta(), Vec2::new(6, 5));
        assert_eq!(pos + Direction::Up.delta(), Vec2::new(5, 4));
        assert_eq!(pos.distance_squared(Vec2::new(8, 9)), 25);
        assert_eq!(pos.distance_squared(pos), 0);
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Vec2::new(2, 3));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Vec2::new(2, 3));
        assert!(snake.body_segments().is_empty());
        assert_eq!(snake.direction, None);
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Vec2::new(5, 5));

        // Move without growing
        snake.advance(Vec2::new(6, 5), false);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Vec2::new(6, 5));

        // Move with growing
        snake.advance(Vec2::new(7, 5), true);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.body, vec![Vec2::new(7, 5), Vec2::new(6, 5)]);
    }

    #[test]
    fn test_collision_detection() {
        let mut snake = Snake::new(Vec2::new(3, 5));
        snake.advance(Vec2::new(4, 5), true);
        snake.advance(Vec2::new(5, 5), true);

        assert!(!snake.collides_with_body(Vec2::new(5, 5))); // head
        assert!(snake.collides_with_body(Vec2::new(4, 5))); // body
        assert!(snake.collides_with_body(Vec2::new(3, 5))); // tail
        assert!(!snake.collides_with_body(Vec2::new(10, 10))); // empty
    }

    #[test]
    fn test_reversal_guard() {
        let mut snake = Snake::new(Vec2::new(5, 5));
        snake.direction = Some(Direction::Right);

        snake.buffer(Direction::Left);
        assert_eq!(snake.commit_direction(), Some(Direction::Right));

        snake.buffer(Direction::Down);
        assert_eq!(snake.commit_direction(), Some(Direction::Down));

        snake.direction = Some(Direction::Right);
        snake.buffer(Direction::Up);
        assert_eq!(snake.commit_direction(), Some(Direction::Up));
    }

    #[test]
    fn test_first_direction_always_accepted() {
        let mut snake = Snake::new(Vec2::new(5, 5));
        assert_eq!(snake.commit_direction(), None);

        snake.buffer(Direction::Left);
        assert_eq!(snake.commit_direction(), Some(Direction::Left));
    }

    #[test]
    fn test_game_state_creation() {
        let level = Level::parse("#S F X E#").unwrap();
        let state = GameState::new(level, 32);

        assert_eq!(state.status, GameStatus::Start);
        assert_eq!(state.snake.head(), Vec2::new(1, 0));
        assert_eq!(state.enemies, vec![Enemy::new(Vec2::new(5, 0))]);
        assert_eq!(state.score, 0);
        assert!(!state.is_powered_up());
    }

    #[test]
    fn test_status_is_over() {
        assert!(!GameStatus::Start.is_over());
        assert!(!GameStatus::Playing.is_over());
        assert!(GameStatus::Lost.is_over());
        assert!(GameStatus::Won.is_over());
    }
}
