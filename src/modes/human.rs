use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::audio::{AudioSink, SoundEvent};
use crate::game::{Game, GameConfig};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::storage::HighScoreStore;

pub struct HumanMode<A: AudioSink> {
    game: Game,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: A,
    should_quit: bool,
}

impl<A: AudioSink> HumanMode<A> {
    pub fn new(config: GameConfig, store: HighScoreStore, audio: A) -> Self {
        Self {
            game: Game::new(config, store),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            audio,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Restore the terminal even when the loop errored
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Simulation ticks are gated on elapsed real time. Delayed missed-tick
        // behavior lets the tick rate drift under load instead of bursting to
        // catch up.
        let mut tick_timer = interval(self.game.config.tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Render at 30 FPS (33ms per frame), independent of the tick rate
        let mut render_timer = interval(Duration::from_millis(33));
        render_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.game);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Game(command) => self.game.apply(command),
                KeyAction::Quit => self.should_quit = true,
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        let outcome = self.game.tick();

        if outcome.ate_food {
            self.audio.play(SoundEvent::FoodEaten);
        }
        if outcome.game_over() {
            self.audio.play(SoundEvent::Collision);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;
    use crate::game::{Cell, Direction};
    use std::collections::VecDeque;
    use std::env;

    fn temp_store(name: &str) -> HighScoreStore {
        let mut path = env::temp_dir();
        path.push(format!(
            "retro_snake_mode_{}_{}.txt",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        HighScoreStore::new(path)
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default(), temp_store("init"), NullAudio);
        assert!(mode.game.running);
        assert_eq!(mode.game.score, 0);
    }

    #[test]
    fn test_quit_key_sets_flag() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let mut mode = HumanMode::new(GameConfig::default(), temp_store("quit"), NullAudio);
        let event = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        mode.handle_event(event);
        assert!(mode.should_quit);
    }

    struct Recorder(Vec<SoundEvent>);

    impl AudioSink for Recorder {
        fn play(&mut self, event: SoundEvent) {
            self.0.push(event);
        }
    }

    #[test]
    fn test_tick_outcomes_drive_audio() {
        let mut mode = HumanMode::new(
            GameConfig::default(),
            temp_store("audio"),
            Recorder(Vec::new()),
        );

        // Eating triggers the food sound
        mode.game.obstacles.blocks.clear();
        mode.game.food.position = Cell::new(7, 9);
        mode.update_game();
        assert_eq!(mode.audio.0, vec![SoundEvent::FoodEaten]);

        // Crashing triggers the collision sound
        mode.game.snake.body =
            VecDeque::from([Cell::new(0, 9), Cell::new(1, 9), Cell::new(2, 9)]);
        mode.game.snake.direction = Direction::Left;
        mode.game.snake.pending_growth = false;
        mode.game.food.position = Cell::new(12, 12);
        mode.update_game();
        assert_eq!(
            mode.audio.0,
            vec![SoundEvent::FoodEaten, SoundEvent::Collision]
        );
    }
}
