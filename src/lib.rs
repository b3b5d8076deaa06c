//! Pacsnek - a snake crawling through a scrolling maze toward its exit
//!
//! This library provides:
//! - Core game logic: level parsing, snake and enemy movement, tick state machine (game module)
//! - Keyboard mapping for the terminal front-end (input module)
//! - TUI rendering (render module)
//! - Per-run play statistics (metrics module)
//! - Execution modes: interactive play and level checking (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
