//! Maze geometry parsed from a text grid
//!
//! Characters: `#` wall, `F` food, `S` entrance, `E` exit, `X` enemy spawn.
//! Anything else is floor.

use anyhow::{Context, Result};
use std::path::Path;
use thiserror::Error;

use super::state::Vec2;

/// The level shipped with the game
pub const DEFAULT_LEVEL: &str = include_str!("../../assets/level-1.txt");

/// Why a level text was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("level is empty")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("level has no snake start (`S`)")]
    MissingEntrance,
    #[error("level has more than one snake start (`S`), second at {0:?}")]
    DuplicateEntrance(Vec2),
    #[error("level has no exit (`E`)")]
    MissingExit,
    #[error("level has more than one exit (`E`), second at {0:?}")]
    DuplicateExit(Vec2),
    #[error("level has no food (`F`)")]
    NoFood,
}

/// A parsed maze
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub width: i32,
    pub height: i32,
    walls: Vec<Vec<bool>>,
    /// Remaining food, in reading order
    pub foods: Vec<Vec2>,
    pub entrance: Vec2,
    pub exit: Vec2,
    /// Enemy spawn cells, in reading order
    pub enemy_spawns: Vec<Vec2>,
}

impl Level {
    /// Parse and validate a level
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut rows: Vec<&str> = text.lines().collect();
        while rows.last().is_some_and(|row| row.trim().is_empty()) {
            rows.pop();
        }
        let first = rows
            .iter()
            .position(|row| !row.trim().is_empty())
            .ok_or(LevelError::Empty)?;
        let rows = &rows[first..];

        let width = rows[0].chars().count();
        let mut walls = Vec::with_capacity(rows.len());
        let mut foods = Vec::new();
        let mut enemy_spawns = Vec::new();
        let mut entrance = None;
        let mut exit = None;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LevelError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            let mut wall_row = vec![false; width];
            for (x, ch) in row.chars().enumerate() {
                let pos = Vec2::new(x as i32, y as i32);
                match ch {
                    '#' => wall_row[x] = true,
                    'F' => foods.push(pos),
                    'X' => enemy_spawns.push(pos),
                    'S' => {
                        if entrance.replace(pos).is_some() {
                            return Err(LevelError::DuplicateEntrance(pos));
                        }
                    }
                    'E' => {
                        if exit.replace(pos).is_some() {
                            return Err(LevelError::DuplicateExit(pos));
                        }
                    }
                    _ => {}
                }
            }
            walls.push(wall_row);
        }

        let entrance = entrance.ok_or(LevelError::MissingEntrance)?;
        let exit = exit.ok_or(LevelError::MissingExit)?;
        if foods.is_empty() {
            return Err(LevelError::NoFood);
        }

        Ok(Self {
            width: width as i32,
            height: walls.len() as i32,
            walls,
            foods,
            entrance,
            exit,
            enemy_spawns,
        })
    }

    /// Read a level file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read level from {:?}", path))?;
        Self::parse(&text).with_context(|| format!("Invalid level in {:?}", path))
    }

    /// Whether a cell holds a wall; positions are wrapped first
    pub fn is_wall(&self, pos: Vec2) -> bool {
        let pos = self.wrap(pos);
        self.walls[pos.y as usize][pos.x as usize]
    }

    /// Wrap a position onto the torus
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }

    /// Remove the food at `pos`, keeping the order of the rest
    pub fn take_food(&mut self, pos: Vec2) -> bool {
        match self.foods.iter().position(|&food| food == pos) {
            Some(index) => {
                self.foods.remove(index);
                true
            }
            None => false,
        }
    }

    /// Wall rows restricted to the columns `[x_start, x_start + columns)`
    pub fn wall_window(&self, x_start: i32, columns: i32) -> Vec<Vec<bool>> {
        let start = x_start.clamp(0, self.width) as usize;
        let end = (x_start + columns).clamp(0, self.width) as usize;
        self.walls
            .iter()
            .map(|row| row[start..end.max(start)].to_vec())
            .collect()
    }
}
