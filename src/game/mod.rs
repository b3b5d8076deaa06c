//! Core game logic module for the maze snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A driver owns a [`GameState`] and feeds it to [`GameEngine::step`] once per tick.

pub mod action;
pub mod config;
pub mod enemy;
pub mod engine;
pub mod level;
pub mod snapshot;
pub mod state;
pub mod viewport;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{ConfigError, GameConfig};
pub use enemy::{Behavior, choose_step};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use level::{DEFAULT_LEVEL, Level, LevelError};
pub use snapshot::Snapshot;
pub use state::{CollisionType, Enemy, GameState, GameStatus, Snake, Vec2};
pub use viewport::Viewport;
