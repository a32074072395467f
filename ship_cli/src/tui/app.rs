//! Interactive form state and key handling.
//!
//! Kept free of terminal I/O so key sequences can be tested directly.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use ship_core::calculations::ScenarioResult;
use ship_core::errors::CalcResult;
use ship_core::fields::InputField;
use ship_core::session::{Session, Step};
use ship_core::settings::Settings;

/// One-line feedback shown under the form
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Info(String),
    Error(String),
}

pub struct App {
    pub session: Session,
    pub selected: InputField,
    /// Text typed into the selected field, not yet applied
    pub edit_buffer: Option<String>,
    pub status: Option<Status>,
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        App {
            session: Session::new(settings),
            selected: InputField::ALL[0],
            edit_buffer: None,
            status: None,
            should_quit: false,
        }
    }

    /// Result for the current form values, recomputed on every call
    pub fn evaluation(&self) -> CalcResult<ScenarioResult> {
        self.session.evaluate()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if self.edit_buffer.is_some() {
            self.handle_edit_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.select(self.selected.previous()),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.select(self.selected.next()),
            KeyCode::Left | KeyCode::Char('-') => self.step(Step::Down),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => self.step(Step::Up),
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('r') => {
                self.session.reset();
                self.status = Some(Status::Info("Form reset to defaults".to_string()));
            }
            KeyCode::Enter => self.edit_buffer = Some(String::new()),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => self.edit_buffer = Some(c.to_string()),
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, code: KeyCode) {
        let Some(buffer) = self.edit_buffer.as_mut() else {
            return;
        };
        match code {
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => buffer.push(c),
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Esc => self.edit_buffer = None,
            KeyCode::Enter | KeyCode::Tab => self.commit_edit(),
            _ => {}
        }
    }

    fn commit_edit(&mut self) {
        let Some(text) = self.edit_buffer.take() else {
            return;
        };
        if text.is_empty() {
            return;
        }
        match text.parse::<f64>() {
            Ok(value) => {
                let applied = self.session.set_field(self.selected, value);
                if applied != value {
                    self.status = Some(Status::Info(format!(
                        "{} adjusted to {}",
                        self.selected.label(),
                        self.selected.display_value(applied)
                    )));
                } else {
                    self.status = None;
                }
            }
            Err(_) => {
                self.status = Some(Status::Error(format!("'{}' is not a number", text)));
            }
        }
    }

    fn select(&mut self, field: InputField) {
        self.selected = field;
    }

    fn step(&mut self, step: Step) {
        self.session.nudge(self.selected, step);
        self.status = None;
    }

    fn save(&mut self) {
        self.status = Some(match self.session.save() {
            Ok(_) => Status::Info("Scenario saved!".to_string()),
            Err(e) => {
                tracing::warn!(error = %e, "scenario not saved");
                Status::Error(format!("Not saved: {}", e))
            }
        });
    }
}
