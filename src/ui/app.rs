use crate::config::UiConfig;
use crate::game::{Event, Intent, Phase, Session};
use crossterm::event::{self, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

use super::input;

pub struct App {
    session: Session,
    colors: bool,
    poll_interval: Duration,
    message: Option<String>,
}

impl App {
    pub fn new(session: Session, ui: &UiConfig) -> Self {
        App {
            session,
            colors: ui.colors,
            poll_interval: Duration::from_millis(ui.poll_interval_ms),
            message: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.session.start();
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.session.phase() == Phase::Exit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let event::Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(intent) = input::intent_for(key) else {
            return;
        };

        self.message = match (intent, self.session.handle(intent)) {
            (Intent::Move(direction), Event::Blocked) => {
                Some(format!("Can't move {}", direction.name().to_lowercase()))
            }
            (_, Event::Ignored) => match self.session.phase() {
                Phase::Won => Some("You won! Press 'r' to play again.".to_string()),
                Phase::Lost => Some("Game over! Press 'r' to restart.".to_string()),
                _ => None,
            },
            (_, Event::Restarted) => Some("New game started!".to_string()),
            _ => None,
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, &self.message, self.colors);
    }
}
