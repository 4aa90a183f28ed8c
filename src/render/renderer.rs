use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, Game};

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, game: &Game) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Header: title plus live and best score
        let hud = self.render_hud(game);
        frame.render_widget(hud, chunks[0]);

        // Center the game grid horizontally
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(10),
                Constraint::Percentage(80),
                Constraint::Percentage(10),
            ])
            .split(chunks[1])[1];

        // Grid, game-over screen, or pause screen depending on state
        if !game.running {
            frame.render_widget(self.render_game_over(game), game_area);
        } else if game.paused {
            frame.render_widget(self.render_paused(), game_area);
        } else {
            frame.render_widget(self.render_grid(game_area, game), game_area);
        }

        // Footer with controls
        let controls = self.render_controls(chunks[2]);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, _area: Rect, game: &Game) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..game.config.cell_count {
            let mut spans = Vec::new();

            for x in 0..game.config.cell_count {
                let cell = Cell::new(x, y);

                let span = if cell == game.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if game.snake.body.contains(&cell) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if game.obstacles.contains(cell) {
                    Span::styled("█ ", Style::default().fg(Color::Red))
                } else if cell == game.food.position {
                    Span::styled(
                        "● ",
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if let Some(lifespan) = particle_at(game, cell) {
                    // Fade the glyph with the particle's remaining lifespan
                    let level = (lifespan.clamp(0.0, 1.0) * 255.0) as u8;
                    Span::styled("• ", Style::default().fg(Color::Rgb(level, level, level)))
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(span);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(" Retro Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_hud(&self, game: &Game) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled(
                "Retro Snake",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Highest Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                game.highest_score.to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, game: &Game) -> Paragraph<'_> {
        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
        ];

        if game.new_high_score {
            text.push(Line::from(vec![Span::styled(
                "New High Score!",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )]));
            text.push(Line::from(""));
        }

        text.push(Line::from(vec![
            Span::styled("Your Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                game.final_score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        text.push(Line::from(vec![
            Span::styled("Highest Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                game.highest_score.to_string(),
                Style::default().fg(Color::White),
            ),
        ]));
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Space",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to retry", Style::default().fg(Color::Gray)),
        ]));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_paused(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "PAUSED",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "P",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to resume", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
    }

    fn render_controls(&self, _area: Rect) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Cyan)),
            Span::raw(" to pause | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn particle_at(game: &Game, cell: Cell) -> Option<f32> {
    game.particles
        .iter()
        .find(|p| p.cell == cell)
        .map(|p| p.lifespan)
}
