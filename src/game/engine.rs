use log::{debug, info};

use super::{
    action::Action,
    config::GameConfig,
    enemy::Behavior,
    level::Level,
    snapshot::Snapshot,
    state::{CollisionType, GameState, GameStatus},
};

/// Information about a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    /// Whether a movement cycle ran this tick
    pub moved: bool,
    /// Whether the snake ate food this tick
    pub ate_food: bool,
    /// How many enemies were eaten this tick
    pub enemies_eaten: u32,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Status after the tick
    pub status: GameStatus,
    /// Whether the status changed during the tick
    pub status_changed: bool,
    /// Whether the tick replaced the state with a fresh session
    pub restarted: bool,
    /// Additional information about the tick
    pub info: StepInfo,
}

impl StepResult {
    /// Whether the game has ended (won or lost)
    pub fn terminated(&self) -> bool {
        self.status.is_over()
    }
}

/// Outcome of the snake's part of a movement cycle
enum SnakeMove {
    /// No direction yet; the head stays at the entrance
    Idle,
    Moved { ate_food: bool },
    Collided(CollisionType),
    ReachedExit,
}

/// The game engine that handles all game logic
///
/// The engine holds the configuration and the pristine level; the session
/// itself lives in a [`GameState`] owned by the caller.
pub struct GameEngine {
    config: GameConfig,
    level: Level,
}

impl GameEngine {
    /// Create a new game engine with the given configuration and level
    pub fn new(config: GameConfig, level: Level) -> Self {
        Self { config, level }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A fresh session on the start screen
    ///
    /// Restart goes through here too. Parsing is deterministic, so a clone of
    /// the level parsed at startup is the same as parsing the file again.
    pub fn reset(&self) -> GameState {
        GameState::new(self.level.clone(), self.config.visible_width)
    }

    /// Render view of a state
    pub fn snapshot<'a>(&self, state: &'a GameState) -> Snapshot<'a> {
        Snapshot::capture(state, self.config.blink_period)
    }

    /// Advance the game by one tick
    pub fn step(&self, state: &mut GameState, action: Action) -> StepResult {
        let before = state.status;
        let mut info = StepInfo::default();
        let mut restarted = false;

        match state.status {
            GameStatus::Start => self.step_start(state, action),
            GameStatus::Playing => self.step_playing(state, action, &mut info),
            GameStatus::Lost | GameStatus::Won => {
                if action == Action::Restart {
                    *state = self.reset();
                    state.status = GameStatus::Playing;
                    restarted = true;
                    info!("Restarting level");
                }
            }
        }

        StepResult {
            status: state.status,
            status_changed: state.status != before,
            restarted,
            info,
        }
    }

    fn step_start(&self, state: &mut GameState, action: Action) {
        if action == Action::Start {
            state.status = GameStatus::Playing;
            info!("Game started");
        }
        state.blink_counter = (state.blink_counter + 1) % self.config.blink_period;
    }

    fn step_playing(&self, state: &mut GameState, action: Action, info: &mut StepInfo) {
        if let Action::Move(direction) = action {
            state.snake.buffer(direction);
        }

        state.frames_since_move += 1;
        if state.frames_since_move >= self.config.move_interval {
            state.frames_since_move = 0;
            self.movement_cycle(state, info);
        }

        if state.power_up_ticks > 0 {
            state.power_up_ticks -= 1;
        }
    }

    /// Snake, then enemies, then camera
    fn movement_cycle(&self, state: &mut GameState, info: &mut StepInfo) {
        info.moved = true;

        match self.move_snake(state) {
            SnakeMove::Idle => {}
            SnakeMove::Collided(collision) => {
                info.collision_type = Some(collision);
                state.status = GameStatus::Lost;
                info!("Snake hit {:?}, final score {}", collision, state.score);
                return;
            }
            SnakeMove::ReachedExit => {
                state.status = GameStatus::Won;
                info!("Exit reached, final score {}", state.score);
                return;
            }
            SnakeMove::Moved { ate_food } => info.ate_food = ate_food,
        }

        self.move_enemies(state, info);

        let level_width = state.level.width;
        state.viewport.follow(state.snake.head().x, level_width);
    }

    fn move_snake(&self, state: &mut GameState) -> SnakeMove {
        let Some(direction) = state.snake.commit_direction() else {
            return SnakeMove::Idle;
        };

        let new_head = state.level.wrap(state.snake.head() + direction.delta());

        if state.level.is_wall(new_head) {
            return SnakeMove::Collided(CollisionType::Wall);
        }
        if state.snake.collides_with_body(new_head) {
            return SnakeMove::Collided(CollisionType::SelfCollision);
        }

        if new_head == state.level.exit {
            state.snake.advance(new_head, true);
            return SnakeMove::ReachedExit;
        }

        let ate_food = state.level.take_food(new_head);
        state.snake.advance(new_head, ate_food);

        if ate_food {
            state.score += self.config.food_score;
            state.power_up_ticks = self.config.power_up_duration;
            debug!(
                "Food eaten at {:?}, {} left",
                new_head,
                state.level.foods.len()
            );
        }

        SnakeMove::Moved { ate_food }
    }

    fn move_enemies(&self, state: &mut GameState, info: &mut StepInfo) {
        let target = state.snake.head();
        let behavior = if state.is_powered_up() {
            Behavior::Flee
        } else {
            Behavior::Chase
        };

        let mut index = 0;
        while index < state.enemies.len() {
            state.enemies[index].advance(&state.level, target, behavior);

            if state.enemies[index].position != target {
                index += 1;
                continue;
            }

            if behavior == Behavior::Flee {
                state.enemies.remove(index);
                state.score += self.config.enemy_bonus;
                info.enemies_eaten += 1;
                debug!("Enemy eaten at {:?}", target);
            } else {
                state.status = GameStatus::Lost;
                info.collision_type = Some(CollisionType::Enemy);
                info!("Caught by an enemy, final score {}", state.score);
                return;
            }
        }
    }
}
