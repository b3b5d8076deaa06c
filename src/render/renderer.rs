use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameStatus, Snapshot, Vec2};
use crate::metrics::GameMetrics;

const TITLE: &str = "PACSNEK MAZE";

pub struct Renderer {
    /// Ticks per second, used to show the power-up in seconds
    tick_rate_hz: u32,
}

impl Renderer {
    pub fn new(tick_rate_hz: u32) -> Self {
        Self { tick_rate_hz }
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let game_area = chunks[1];

        match snapshot.status {
            GameStatus::Start => {
                frame.render_widget(self.render_title(snapshot), game_area);
            }
            GameStatus::Playing => {
                frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);
                frame.render_widget(self.render_grid(snapshot), game_area);
            }
            GameStatus::Lost | GameStatus::Won => {
                frame.render_widget(self.render_stats(snapshot, metrics), chunks[0]);
                frame.render_widget(self.render_game_over(snapshot, metrics), game_area);
            }
        }

        frame.render_widget(self.render_controls(snapshot.status), chunks[2]);
    }

    fn render_title(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let prompt = if snapshot.show_prompt {
            "press SPACE to start"
        } else {
            ""
        };

        let text = vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(prompt, Style::default().fg(Color::White))),
        ];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_grid(&self, snapshot: &Snapshot) -> Paragraph<'_> {
        let mut cells: Vec<Vec<Span>> = snapshot
            .walls
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&wall| {
                        if wall {
                            Span::styled("██", Style::default().fg(Color::DarkGray))
                        } else {
                            Span::raw("  ")
                        }
                    })
                    .collect()
            })
            .collect();

        let mut place = |pos: Vec2, span: Span<'static>| {
            if let Some(x) = snapshot.screen_x(pos) {
                if let Some(cell) = cells
                    .get_mut(pos.y as usize)
                    .and_then(|row| row.get_mut(x))
                {
                    *cell = span;
                }
            }
        };

        for &food in snapshot.foods {
            place(food, Span::styled("● ", Style::default().fg(Color::Red)));
        }
        place(
            snapshot.exit,
            Span::styled("▓▓", Style::default().fg(Color::Blue)),
        );

        let enemy_style = if snapshot.power_up_ticks > 0 {
            Style::default().fg(Color::LightBlue)
        } else {
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        };
        for enemy in snapshot.enemies {
            place(enemy.position, Span::styled("ᗣ ", enemy_style));
        }

        // Head last so it always shows on top
        for (i, &segment) in snapshot.body.iter().enumerate().rev() {
            let span = if i == 0 {
                Span::styled(
                    "■ ",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled("□ ", Style::default().fg(Color::Green))
            };
            place(segment, span);
        }

        let lines: Vec<Line> = cells.into_iter().map(Line::from).collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(format!(" {} ", TITLE)),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                snapshot.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.best_score.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ];

        if snapshot.power_up_ticks > 0 {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                format!("POWER-UP {}", snapshot.power_up_ticks / self.tick_rate_hz),
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_game_over(&self, snapshot: &Snapshot, metrics: &GameMetrics) -> Paragraph<'_> {
        let (message, color) = if snapshot.status == GameStatus::Won {
            ("YOU WIN!", Color::Green)
        } else {
            ("GAME OVER", Color::Red)
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                message,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Games: ", Style::default().fg(Color::Yellow)),
                Span::raw(format!("{} ({} won)", metrics.games_played, metrics.games_won)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self, status: GameStatus) -> Paragraph<'_> {
        let text = match status {
            GameStatus::Start => Line::from(vec![
                Span::styled("SPACE", Style::default().fg(Color::Cyan)),
                Span::raw(" to start | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            _ => Line::from(vec![
                Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
                Span::raw(" or "),
                Span::styled("WASD", Style::default().fg(Color::Cyan)),
                Span::raw(" to move | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(vec![text]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(60)
    }
}
