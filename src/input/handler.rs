use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if let Some(direction) = steering(key.code) {
            return KeyAction::GameAction(Action::Move(direction));
        }

        match key.code {
            // Title screen
            KeyCode::Char(' ') | KeyCode::Enter => KeyAction::GameAction(Action::Start),
            // End screen
            KeyCode::Char('r' | 'R') => KeyAction::GameAction(Action::Restart),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }
}

/// Arrow keys, or WASD in either case
fn steering(code: KeyCode) -> Option<Direction> {
    let direction = match code {
        KeyCode::Up => Direction::Up,
        KeyCode::Down => Direction::Down,
        KeyCode::Left => Direction::Left,
        KeyCode::Right => Direction::Right,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Direction::Up,
            's' => Direction::Down,
            'a' => Direction::Left,
            'd' => Direction::Right,
            _ => return None,
        },
        _ => return None,
    };
    Some(direction)
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameEngine, GameStatus, Level};

    fn press(handler: &InputHandler, code: KeyCode) -> KeyAction {
        handler.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_steering_keys() {
        let handler = InputHandler::new();
        let layouts = [
            (KeyCode::Up, 'w', Direction::Up),
            (KeyCode::Down, 's', Direction::Down),
            (KeyCode::Left, 'a', Direction::Left),
            (KeyCode::Right, 'd', Direction::Right),
        ];

        for (arrow, letter, direction) in layouts {
            let expected = KeyAction::GameAction(Action::Move(direction));
            assert_eq!(press(&handler, arrow), expected);
            assert_eq!(press(&handler, KeyCode::Char(letter)), expected);

            let shifted = KeyEvent::new(
                KeyCode::Char(letter.to_ascii_uppercase()),
                KeyModifiers::SHIFT,
            );
            assert_eq!(handler.handle_key_event(shifted), expected);
        }
    }

    #[test]
    fn test_session_keys() {
        let handler = InputHandler::new();

        for key in [KeyCode::Char(' '), KeyCode::Enter] {
            assert_eq!(press(&handler, key), KeyAction::GameAction(Action::Start));
        }
        for key in [KeyCode::Char('r'), KeyCode::Char('R')] {
            assert_eq!(press(&handler, key), KeyAction::GameAction(Action::Restart));
        }
        for key in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            assert_eq!(press(&handler, key), KeyAction::Quit);
        }

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_unbound_keys() {
        let handler = InputHandler::new();
        for key in [KeyCode::Char('x'), KeyCode::Char('c'), KeyCode::Tab, KeyCode::F(1)] {
            assert_eq!(press(&handler, key), KeyAction::None);
        }
    }

    #[test]
    fn test_keys_drive_a_session() {
        let level = Level::parse(
            "\
#####
SF..E
#####",
        )
        .unwrap();
        let engine = GameEngine::new(GameConfig::every_tick(), level);
        let mut state = engine.reset();
        let handler = InputHandler::new();

        // Title screen, a wall bump, then restart from the end screen
        for (key, status) in [
            (KeyCode::Enter, GameStatus::Playing),
            (KeyCode::Char('d'), GameStatus::Playing),
            (KeyCode::Up, GameStatus::Lost),
            (KeyCode::Char('R'), GameStatus::Playing),
        ] {
            let KeyAction::GameAction(action) = press(&handler, key) else {
                panic!("{key:?} is not a game key");
            };
            assert_eq!(engine.step(&mut state, action).status, status);
        }
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 1);
    }
}
