//! Main TUI application state and logic

use crate::playback::{Controller, Scheduler, StepOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest the event loop waits for input before checking timers again
const EVENT_POLL: Duration = Duration::from_millis(50);

/// Minimum time between two accepted space presses
const SPACE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Speed change per `+` / `-` press
const SPEED_STEP: u32 = 10;

/// The main application state
pub struct App<S: Scheduler> {
    /// The playback controller
    pub controller: Controller<S>,

    /// Scroll offset of the code pane
    pub code_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl<S: Scheduler> App<S> {
    /// Create a new app around a configured controller
    pub fn new(controller: Controller<S>) -> Self {
        App {
            controller,
            code_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Deliver auto-play ticks
            if self.controller.run_due_ticks() > 0 {
                self.status_message = if self.controller.is_done() {
                    "Sorted".to_string()
                } else {
                    "Playing...".to_string()
                };
            }

            // Wake up in time for the next tick
            let timeout = self
                .controller
                .scheduler()
                .next_due_in()
                .map_or(EVENT_POLL, |due| due.min(EVENT_POLL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Bars on top, menu and code below, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(55),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[1]);

        super::panes::render_bars_pane(
            frame,
            main_chunks[0],
            self.controller.array(),
            self.controller.is_done(),
        );

        super::panes::render_info_pane(
            frame,
            bottom[0],
            self.controller.registry(),
            self.controller.descriptor(),
        );

        super::panes::render_code_pane(
            frame,
            bottom[1],
            self.controller.descriptor(),
            &mut self.code_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &super::panes::StatusRenderData {
                message: &self.status_message,
                steps_taken: self.controller.steps_taken(),
                speed: self.controller.speed(),
                is_playing: self.controller.is_auto_sorting(),
                is_running: self.controller.is_running(),
                is_done: self.controller.is_done(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys select from the algorithm menu
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.select_position(index);
            }
            KeyCode::Tab => {
                let next = self
                    .controller
                    .selected()
                    .and_then(|a| self.controller.registry().position(a.id()))
                    .map_or(0, |i| (i + 1) % self.controller.registry().len());
                self.select_position(next);
            }
            KeyCode::Right | KeyCode::Char('n') => {
                self.controller.pause_auto_sorting();
                self.step();
            }
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= SPACE_DEBOUNCE {
                    self.last_space_press = Instant::now();
                    self.controller.toggle_auto_sorting();
                    self.status_message = if self.controller.is_auto_sorting() {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.controller.reset_array();
                self.status_message = "New array".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let speed = self.controller.speed().saturating_add(SPEED_STEP);
                self.change_speed(speed);
            }
            KeyCode::Char('-') => {
                let speed = self.controller.speed().saturating_sub(SPEED_STEP).max(1);
                self.change_speed(speed);
            }
            KeyCode::Up => {
                self.code_scroll = self.code_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.code_scroll = self.code_scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn select_position(&mut self, index: usize) {
        let Some(id) = self
            .controller
            .registry()
            .by_position(index)
            .map(|a| a.id())
        else {
            return;
        };

        if let Some(descriptor) = self.controller.select_algorithm(id) {
            self.status_message = format!("Selected {}", descriptor.title);
            self.code_scroll = 0;
        }
    }

    fn step(&mut self) {
        self.status_message = match self.controller.step() {
            StepOutcome::Idle => "Select an algorithm first".to_string(),
            StepOutcome::Advanced => "Stepped forward".to_string(),
            StepOutcome::Finished => "Sorted".to_string(),
        };
    }

    fn change_speed(&mut self, speed: u32) {
        self.status_message = match self.controller.set_speed(speed) {
            Ok(()) => format!("Speed {}", speed),
            Err(e) => format!("Error: {}", e),
        };
    }
}
