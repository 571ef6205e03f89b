use crate::command::Command;
use crate::game::Game;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
    quitting: bool,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>) -> App<R> {
        App {
            game,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            terminal.draw(|frame| frame.render_widget(&self.game, frame.area()))?;
            self.process_input()?;
        }
        Ok(())
    }

    /// Wait for either an input event or the next timer deadline, whichever
    /// comes first, and handle it
    fn process_input(&mut self) -> io::Result<()> {
        if let Some(when) = self.game.next_deadline() {
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.game.advance_to(Instant::now());
                return Ok(());
            }
        }
        self.handle_event(read()?, Instant::now());
        Ok(())
    }

    fn handle_event(&mut self, event: Event, now: Instant) {
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        if matches!(cmd, Command::Quit | Command::Q) {
            self.quitting = true;
        } else if self.game.notice_open() {
            // The end-of-game notice blocks everything else until dismissed
            if cmd == Command::Enter {
                self.game.dismiss_notice();
            }
        } else if let Some(dir) = cmd.direction() {
            self.game.handle_direction(dir);
        } else if cmd == Command::R || (cmd == Command::Enter && !self.game.is_running()) {
            self.game.start(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{default_palette, Board};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::time::Duration;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn new_app() -> App<ChaCha12Rng> {
        App::new(Game::new_with_rng(
            Board::default(),
            default_palette(),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        ))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(code.into())
    }

    #[test]
    fn enter_starts_game() {
        let mut app = new_app();
        let t0 = Instant::now();
        assert!(!app.game.is_running());
        app.handle_event(key(KeyCode::Enter), t0);
        assert!(app.game.is_running());
        assert_eq!(app.game.next_deadline(), Some(t0 + Duration::from_millis(150)));
    }

    #[test]
    fn enter_does_not_restart_running_game() {
        let mut app = new_app();
        let t0 = Instant::now();
        app.handle_event(key(KeyCode::Enter), t0);
        app.handle_event(key(KeyCode::Enter), t0 + Duration::from_millis(100));
        assert_eq!(app.game.next_deadline(), Some(t0 + Duration::from_millis(150)));
    }

    #[test]
    fn r_restarts_running_game() {
        let mut app = new_app();
        let t0 = Instant::now();
        app.handle_event(key(KeyCode::Enter), t0);
        let t1 = t0 + Duration::from_millis(100);
        app.handle_event(key(KeyCode::Char('r')), t1);
        assert!(app.game.is_running());
        assert_eq!(app.game.next_deadline(), Some(t1 + Duration::from_millis(150)));
    }

    #[test]
    fn notice_blocks_input_until_dismissed() {
        let mut app = new_app();
        let t0 = Instant::now();
        app.handle_event(key(KeyCode::Enter), t0);
        // Run straight into the right-hand wall
        app.game.advance_to(t0 + Duration::from_secs(60));
        assert!(app.game.is_over());
        assert!(app.game.notice_open());
        app.handle_event(key(KeyCode::Char('r')), t0);
        assert!(app.game.is_over());
        app.handle_event(key(KeyCode::Enter), t0);
        assert!(app.game.is_over());
        assert!(!app.game.notice_open());
        app.handle_event(key(KeyCode::Enter), t0);
        assert!(app.game.is_running());
        assert_eq!(app.game.score(), 0);
    }

    #[test]
    fn quit_keys() {
        for ev in [
            key(KeyCode::Char('q')),
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        ] {
            let mut app = new_app();
            app.handle_event(ev, Instant::now());
            assert!(app.quitting);
        }
    }

    #[test]
    fn ignore_other_events() {
        let mut app = new_app();
        app.handle_event(key(KeyCode::Char('x')), Instant::now());
        app.handle_event(Event::FocusLost, Instant::now());
        assert!(!app.quitting);
        assert!(!app.game.is_running());
    }
}
