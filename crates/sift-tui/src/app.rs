//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Keystrokes flow into the
//! input bar and from there into the dispatcher; published search state
//! flows back through a watch channel and is folded into the widgets at the
//! top of every loop iteration.

use crate::{
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        input_bar::{InputBar, InputBarState},
        results_list::{ResultsList, ResultsListState},
        status_bar::StatusBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    Frame, Terminal,
};
use sift_core::{config::Config, Dispatcher, SearchState};
use std::{io, time::Duration};
use tokio::sync::watch;

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub input: InputBarState,
    pub results: ResultsListState,
    /// Latest published search state, rendered by the status bar.
    pub search: SearchState,
    pub theme: Theme,
    pub config: Config,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    dispatcher: Dispatcher,
    state_rx: watch::Receiver<SearchState>,
}

impl App {
    pub fn new(
        dispatcher: Dispatcher,
        state_rx: watch::Receiver<SearchState>,
        config: Config,
        theme: Theme,
    ) -> Self {
        App {
            state: AppState {
                input: InputBarState::default(),
                results: ResultsListState::default(),
                search: SearchState::default(),
                theme,
                config,
                quit: false,
            },
            dispatcher,
            state_rx,
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub async fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            // Fold in any search state published since the last iteration.
            if self.state_rx.has_changed()? {
                let search = self.state_rx.borrow_and_update().clone();
                self.state.results.set_matches(search.results.clone());
                self.state.search = search;
            }

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        if let Some(ev) = event::to_app_event(Event::Key(key)) {
                            tracing::debug!(event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }

            // Yield so debounce timer tasks get a turn between polls.
            tokio::task::yield_now().await;
        }

        // Teardown: a pending debounce timer must not fire into a dead UI.
        self.dispatcher.shutdown();
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.state.quit = true;
            }

            // Escape clears a non-empty input; a second press exits.
            AppEvent::Escape => {
                if self.state.input.value.is_empty() {
                    tracing::debug!("quit (escape on empty input)");
                    self.state.quit = true;
                } else if self.state.input.set(String::new()) {
                    self.dispatcher.on_input_change("");
                }
            }

            // Adopt the selected match into the input field.
            AppEvent::Enter => {
                if let Some(selected) = self.state.results.selected() {
                    let selected = selected.to_string();
                    tracing::debug!(selected = %selected, "match adopted");
                    if self.state.input.set(selected.clone()) {
                        self.dispatcher.on_input_change(&selected);
                    }
                }
            }

            AppEvent::ListNav(_) | AppEvent::PageUp | AppEvent::PageDown => {
                self.state.results.handle(&event);
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => {
                if self.state.input.handle(&other) {
                    let term = self.state.input.value.clone();
                    self.dispatcher.on_input_change(&term);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 3-line input bar | results | 1-line status bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(state.config.ui.results_pane_min_height),
            Constraint::Length(1),
        ])
        .split(area);

    let input_bar = InputBar::new(&state.input, &state.config.ui.placeholder, &state.theme);
    let (cx, cy) = input_bar.cursor_position(vert[0]);
    frame.render_widget(input_bar, vert[0]);
    frame.render_widget(ResultsList::new(&state.results, &state.theme), vert[1]);
    frame.render_widget(StatusBar::new(&state.search, &state.theme), vert[2]);

    frame.set_cursor_position((cx, cy));
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}
