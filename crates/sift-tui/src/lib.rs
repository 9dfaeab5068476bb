//! sift TUI — ratatui application shell.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use sift_core::config::Config;
use sift_core::{Dispatcher, SearchExecutor};
use std::sync::Arc;

/// Build the full pipeline over `candidates` and run the TUI until exit.
pub async fn run(candidates: Vec<String>, config: Config) -> anyhow::Result<()> {
    let executor = Arc::new(SearchExecutor::new(candidates));
    let state_rx = executor.subscribe();
    let dispatcher = Dispatcher::new(
        executor,
        config.timing.debounce_delay(),
        config.timing.throttle_limit(),
    );
    let theme = theme::Theme::load_default();
    App::new(dispatcher, state_rx, config, theme).run().await
}
