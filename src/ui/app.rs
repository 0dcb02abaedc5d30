use crate::config::UiConfig;
use crate::error::MoveError;
use crate::game::{GameController, MoveEvent, COLS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

pub struct App {
    controller: GameController,
    selected_column: usize,
    start_column: usize,
    poll_interval: Duration,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        App {
            controller: GameController::new(),
            selected_column: config.start_column,
            start_column: config.start_column,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.submit(self.selected_column);
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.submit(self.selected_column);
            }
            KeyCode::Char('r') => {
                let event = self.controller.reset();
                self.selected_column = self.start_column;
                self.message = Some(describe(&event));
            }
            _ => {}
        }
    }

    /// Forward a column choice to the controller and show what happened
    fn submit(&mut self, column: usize) {
        self.message = match self.controller.submit_move(column) {
            Ok(MoveEvent::Moved { .. }) => None,
            Ok(event) => Some(describe(&event)),
            Err(MoveError::GameOver) => Some("Game over! Press 'r' to restart.".to_string()),
            Err(err) => Some(err.to_string()),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            self.controller.state(),
            self.selected_column,
            &self.message,
        );
    }
}

/// Status line text for a controller event
pub fn describe(event: &MoveEvent) -> String {
    match event {
        MoveEvent::Moved { column, player, .. } => {
            format!("{} played column {}", player.name(), column + 1)
        }
        MoveEvent::ColumnFull { column } => format!("Column {} is full!", column + 1),
        MoveEvent::Win { player, .. } => format!("{} wins!", player.name()),
        MoveEvent::Draw { .. } => "It's a draw!".to_string(),
        MoveEvent::Reset => "New game started!".to_string(),
    }
}
