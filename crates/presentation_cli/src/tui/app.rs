//! Interactive panel state and key handling

use application::{SearchController, SearchError, SearchTicket, ThemeController, WeatherReport};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Braille spinner shown while a search is in flight
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug)]
pub struct App {
    /// Text in the city input box
    pub input: String,
    pub controller: SearchController,
    pub theme: ThemeController,
    /// One-line notice shown in the footer (e.g. a failed theme save)
    pub status: Option<String>,
    pub spinner_frame: usize,
    pub should_quit: bool,
    /// Task running the latest submitted search
    in_flight: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(controller: SearchController, theme: ThemeController) -> Self {
        Self {
            input: String::new(),
            controller,
            theme,
            status: None,
            spinner_frame: 0,
            should_quit: false,
            in_flight: None,
        }
    }

    /// Apply a key press; returns a ticket when a search should start
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SearchTicket> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('t') if ctrl => self.toggle_theme(),
            KeyCode::Enter => {
                self.status = None;
                return self.controller.submit(&self.input);
            },
            KeyCode::Backspace => {
                self.input.pop();
            },
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            _ => {},
        }

        None
    }

    fn toggle_theme(&mut self) {
        match self.theme.toggle() {
            Ok(_) => self.status = None,
            Err(e) => {
                warn!(error = %e, "Failed to save theme preference");
                self.status = Some("Theme changed but could not be saved".to_string());
            },
        }
    }

    /// Track the task of a new search, aborting the previous one
    pub fn track_search(&mut self, task: JoinHandle<()>) {
        self.cancel_search();
        self.in_flight = Some(task);
    }

    /// Abort the in-flight search task, if any
    pub fn cancel_search(&mut self) {
        if let Some(task) = self.in_flight.take() {
            if !task.is_finished() {
                debug!("Aborting superseded search");
            }
            task.abort();
        }
    }

    /// Apply a finished search; stale generations are dropped
    pub fn complete(&mut self, generation: u64, outcome: Result<WeatherReport, SearchError>) {
        self.controller.complete(generation, outcome);
    }

    pub fn on_tick(&mut self) {
        if self.controller.state().is_loading() {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}
