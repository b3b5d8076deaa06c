//! Greedy one-step enemy movement
//!
//! Enemies look one cell ahead in each cardinal direction and take the step
//! that brings them closest to the snake's head, or farthest from it while a
//! power-up is running. Only walls block them.

use super::action::Direction;
use super::level::Level;
use super::state::{Enemy, Vec2};

/// Whether an enemy closes in on its target or runs from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Chase,
    Flee,
}

impl Behavior {
    fn improves(&self, candidate: i64, best: i64) -> bool {
        match self {
            Behavior::Chase => candidate < best,
            Behavior::Flee => candidate > best,
        }
    }
}

/// Pick the next cell for an enemy at `from`, or `None` when walled in
///
/// Candidates are tried in [`Direction::ENEMY_ORDER`]; a later candidate only
/// replaces the current pick when strictly better.
pub fn choose_step(level: &Level, from: Vec2, target: Vec2, behavior: Behavior) -> Option<Vec2> {
    let mut best: Option<(Vec2, i64)> = None;

    for direction in Direction::ENEMY_ORDER {
        let candidate = level.wrap(from + direction.delta());
        if level.is_wall(candidate) {
            continue;
        }

        let score = candidate.distance_squared(target);
        let better = match best {
            None => true,
            Some((_, best_score)) => behavior.improves(score, best_score),
        };
        if better {
            best = Some((candidate, score));
        }
    }

    best.map(|(cell, _)| cell)
}

impl Enemy {
    /// Take one greedy step relative to `target`
    pub fn advance(&mut self, level: &Level, target: Vec2, behavior: Behavior) {
        if let Some(next) = choose_step(level, self.position, target, behavior) {
            self.position = next;
        }
    }
}
