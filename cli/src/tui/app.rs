use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use paytick_core::{
    placeholder_intake, AccrualTimer, CurrencyFormat, DocumentIntake, PlaceholderExtractor, Settings,
};

use crate::upload::{parse_dropped_path, read_payslip};

const IDLE_POLL: Duration = Duration::from_millis(250);

pub enum InputMode {
    Normal,
    Uploading,
}

pub struct App {
    pub timer: AccrualTimer,
    pub intake: DocumentIntake<PlaceholderExtractor>,
    pub currency: CurrencyFormat,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: &Settings) -> App {
        App {
            timer: AccrualTimer::new(),
            intake: placeholder_intake(settings),
            currency: settings.currency.clone(),
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            notice: None,
            should_quit: false,
        }
    }

    pub fn accepted_types(&self) -> String {
        self.intake.accepted_types().join(", ")
    }

    pub fn handle_key(&mut self, code: KeyCode, now: Instant) {
        // A notice blocks everything until acknowledged
        if self.notice.is_some() {
            self.dismiss_notice();
            return;
        }

        match self.input_mode {
            InputMode::Normal => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('u') | KeyCode::Char('o') => self.enter_upload_mode(),
                KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('s') => {
                    if self.timer.pay_record().is_some() {
                        self.toggle_running(now);
                    } else {
                        self.enter_upload_mode();
                    }
                }
                KeyCode::Char('r') => self.reset(),
                KeyCode::Char('n') => self.new_payslip(),
                _ => {}
            },
            InputMode::Uploading => match code {
                KeyCode::Enter => self.submit_upload(),
                KeyCode::Esc => self.exit_input_mode(),
                KeyCode::Char(c) => self.input_char(c),
                KeyCode::Backspace => self.delete_char(),
                KeyCode::Left => self.move_cursor_left(),
                KeyCode::Right => self.move_cursor_right(),
                _ => {}
            },
        }
    }

    /// Dropping a file on the terminal shows up as a paste of its path.
    pub fn on_paste(&mut self, text: &str) {
        self.exit_input_mode();
        match parse_dropped_path(text) {
            Some(path) => {
                self.upload_path(&path);
            }
            None => tracing::debug!("Ignored paste without a path"),
        }
    }

    pub fn on_tick(&mut self, now: Instant) -> u32 {
        self.timer.poll(now)
    }

    /// How long the event loop may block before the next tick is due.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.timer
            .next_tick_in(now)
            .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL))
    }

    /// On failure the current record and timer are left as they were.
    pub fn upload_path(&mut self, path: &Path) -> bool {
        match read_payslip(&self.intake, path) {
            Ok(record) => {
                self.timer.load_pay_record(record);
                true
            }
            Err(e) => {
                self.notice = Some(e.to_string());
                false
            }
        }
    }

    pub fn toggle_running(&mut self, now: Instant) {
        self.timer.toggle(now);
    }

    pub fn reset(&mut self) {
        self.timer.reset();
    }

    pub fn new_payslip(&mut self) {
        self.timer.unload();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn enter_upload_mode(&mut self) {
        self.input_mode = InputMode::Uploading;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_upload(&mut self) {
        let typed = self.input.trim().to_string();
        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();

        if typed.is_empty() {
            return;
        }
        let path = parse_dropped_path(&typed).unwrap_or_else(|| PathBuf::from(&typed));
        self.upload_path(&path);
    }
}
